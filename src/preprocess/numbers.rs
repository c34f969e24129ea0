//! English words for numerals.
//!
//! Words are emitted space-separated without hyphens ("forty two"), so each word
//! is a single token after whitespace splitting.

const ONES: [&str; 20] = [
    "zero",
    "one",
    "two",
    "three",
    "four",
    "five",
    "six",
    "seven",
    "eight",
    "nine",
    "ten",
    "eleven",
    "twelve",
    "thirteen",
    "fourteen",
    "fifteen",
    "sixteen",
    "seventeen",
    "eighteen",
    "nineteen",
];

const TENS: [&str; 10] = [
    "", "", "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety",
];

const SCALES: [(u64, &str); 6] = [
    (1_000_000_000_000_000_000, "quintillion"),
    (1_000_000_000_000_000, "quadrillion"),
    (1_000_000_000_000, "trillion"),
    (1_000_000_000, "billion"),
    (1_000_000, "million"),
    (1_000, "thousand"),
];

/// Cardinal words for a non-negative integer: 1001 -> "one thousand and one"
#[must_use]
pub fn cardinal_words(n: u64) -> String {
    if n == 0 {
        return ONES[0].to_string();
    }

    let mut words: Vec<&'static str> = Vec::new();
    let mut rest = n;
    for (scale, name) in SCALES {
        if rest >= scale {
            push_below_thousand(rest / scale, &mut words);
            words.push(name);
            rest %= scale;
        }
    }
    if rest > 0 {
        if !words.is_empty() && rest < 100 {
            words.push("and");
        }
        push_below_thousand(rest, &mut words);
    }

    words.join(" ")
}

/// Words for a numeral with an optional decimal part: "3.14" -> "three point one four".
///
/// Thousands separators (`,`) are ignored. Returns None if the integer part does
/// not fit in a `u64` or the text is not a numeral.
#[must_use]
pub fn numeral_words(numeral: &str) -> Option<String> {
    let (integer, fraction) = match numeral.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (numeral, None),
    };

    let digits: String = integer.chars().filter(|c| *c != ',').collect();
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    let mut words = cardinal_words(digits.parse().ok()?);

    if let Some(fraction) = fraction {
        if fraction.is_empty() || !fraction.chars().all(|c| c.is_ascii_digit()) {
            return None;
        }
        words.push_str(" point");
        for digit in fraction.bytes() {
            words.push(' ');
            words.push_str(ONES[usize::from(digit - b'0')]);
        }
    }

    Some(words)
}

/// Replace every numeral in `text` with its words.
///
/// A numeral is a run of ASCII digits, optionally with `,` groups of exactly
/// three digits and one `.` decimal part. Words are separated from adjacent
/// letters by a space ("5th" -> "five th"). Numerals too large to convert are
/// left as they are.
#[must_use]
pub fn numbers_to_words(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());
    let mut i = 0;

    while i < chars.len() {
        if !chars[i].is_ascii_digit() {
            out.push(chars[i]);
            i += 1;
            continue;
        }

        let end = numeral_end(&chars, i);
        let numeral: String = chars[i..end].iter().collect();
        match numeral_words(&numeral) {
            Some(words) => {
                if i > 0 && chars[i - 1].is_alphanumeric() {
                    out.push(' ');
                }
                out.push_str(&words);
                if end < chars.len() && chars[end].is_alphanumeric() {
                    out.push(' ');
                }
            }
            None => out.push_str(&numeral),
        }
        i = end;
    }

    out
}

/// Index one past the numeral starting at `start`
fn numeral_end(chars: &[char], start: usize) -> usize {
    let digits_from = |from: usize| {
        chars[from..]
            .iter()
            .take_while(|c| c.is_ascii_digit())
            .count()
    };

    let mut end = start + digits_from(start);

    // Thousands groups: ",ddd" not followed by a further digit
    while end < chars.len() && chars[end] == ',' && digits_from(end + 1) == 3 {
        end += 4;
    }

    if end < chars.len() && chars[end] == '.' && digits_from(end + 1) > 0 {
        end += 1 + digits_from(end + 1);
    }

    end
}

fn push_below_thousand(n: u64, words: &mut Vec<&'static str>) {
    debug_assert!(n < 1000);
    let hundreds = n / 100;
    let rest = n % 100;

    if hundreds > 0 {
        words.push(ONES[index(hundreds)]);
        words.push("hundred");
        if rest > 0 {
            words.push("and");
        }
    }
    if rest >= 20 {
        words.push(TENS[index(rest / 10)]);
        if rest % 10 > 0 {
            words.push(ONES[index(rest % 10)]);
        }
    } else if rest > 0 {
        words.push(ONES[index(rest)]);
    }
}

#[inline]
fn index(n: u64) -> usize {
    // Always below 20 here
    usize::try_from(n).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cardinal_words() {
        assert_eq!(cardinal_words(0), "zero");
        assert_eq!(cardinal_words(7), "seven");
        assert_eq!(cardinal_words(13), "thirteen");
        assert_eq!(cardinal_words(42), "forty two");
        assert_eq!(cardinal_words(90), "ninety");
        assert_eq!(cardinal_words(101), "one hundred and one");
        assert_eq!(cardinal_words(250), "two hundred and fifty");
        assert_eq!(cardinal_words(1001), "one thousand and one");
        assert_eq!(cardinal_words(1999), "one thousand nine hundred and ninety nine");
        assert_eq!(cardinal_words(2_000_000), "two million");
        assert_eq!(
            cardinal_words(3_000_250),
            "three million two hundred and fifty"
        );
    }

    #[test]
    fn test_numeral_words() {
        assert_eq!(numeral_words("3.5").as_deref(), Some("three point five"));
        assert_eq!(numeral_words("3.14").as_deref(), Some("three point one four"));
        assert_eq!(numeral_words("1,000").as_deref(), Some("one thousand"));
        assert_eq!(numeral_words("abc"), None);
        assert_eq!(numeral_words("99999999999999999999999"), None);
    }

    #[test]
    fn test_numbers_to_words_in_text() {
        assert_eq!(
            numbers_to_words("he had 3 cats and 12 dogs"),
            "he had three cats and twelve dogs"
        );
        assert_eq!(numbers_to_words("it cost 1,250 coins."), "it cost one thousand two hundred and fifty coins.");
        assert_eq!(numbers_to_words("the 5th day"), "the five th day");
        assert_eq!(numbers_to_words("no numbers"), "no numbers");
    }

    #[test]
    fn test_list_commas_are_not_thousands() {
        assert_eq!(numbers_to_words("1,2,3"), "one,two,three");
    }

    #[test]
    fn test_trailing_period_is_not_decimal() {
        assert_eq!(numbers_to_words("I am 7."), "I am seven.");
    }
}
