// Facts about a number that shape its word form

use ukr_num2words::cardinal;

/// What the engine needs to know about a target number.
///
/// Built from the number alone; the base phrase is attached later with
/// [`set_complete_base_form`](Self::set_complete_base_form), which splits it
/// into the words kept verbatim and the final word that gets inflected.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NumberMetadata {
    n: Option<i64>,
    is_last: bool,
    is_negative: bool,
    trailing_zeroes: u32,
    is_multi_word: bool,
    beginning_of_number: Option<String>,
    base_form: Option<String>,
}

impl NumberMetadata {
    /// `None` stands for the "last" sentinel.
    pub fn from_number(n: Option<i64>) -> Self {
        let Some(value) = n else {
            return Self {
                is_last: true,
                ..Self::default()
            };
        };

        let magnitude = value.unsigned_abs();
        let mut trailing_zeroes = 0;
        let mut rest = magnitude;
        while rest != 0 && rest % 10 == 0 {
            trailing_zeroes += 1;
            rest /= 10;
        }

        Self {
            n,
            is_last: false,
            is_negative: value < 0,
            trailing_zeroes,
            is_multi_word: magnitude >= 100 || cardinal(magnitude).contains(char::is_whitespace),
            beginning_of_number: None,
            base_form: None,
        }
    }

    pub fn n(&self) -> Option<i64> {
        self.n
    }

    pub fn is_last(&self) -> bool {
        self.is_last
    }

    pub fn is_negative(&self) -> bool {
        self.is_negative
    }

    /// Count of trailing decimal zeroes. Zero itself has none.
    pub fn trailing_zeroes(&self) -> u32 {
        self.trailing_zeroes
    }

    /// Whether the number counts as multi-word: anything from 100 up, or a
    /// smaller number whose cardinal wording has several words.
    pub fn is_multi_word(&self) -> bool {
        self.is_multi_word
    }

    /// Words preceding the final one, if the base phrase has several.
    pub fn beginning_of_number(&self) -> Option<&str> {
        self.beginning_of_number.as_deref()
    }

    /// The final word of the base phrase.
    pub fn base_form(&self) -> Option<&str> {
        self.base_form.as_deref()
    }

    /// Split `phrase` on its last whitespace run.
    pub fn set_complete_base_form(&mut self, phrase: &str) {
        let phrase = phrase.trim();
        match phrase.rsplit_once(char::is_whitespace) {
            Some((head, tail)) => {
                self.beginning_of_number = Some(head.trim_end().to_string());
                self.base_form = Some(tail.to_string());
            }
            None => {
                self.beginning_of_number = None;
                self.base_form = Some(phrase.to_string());
            }
        }
    }

    /// The phrase reassembled from its beginning and base form.
    pub fn complete_base_form(&self) -> Option<String> {
        let base = self.base_form.as_deref()?;
        Some(match self.beginning_of_number.as_deref() {
            Some(head) => format!("{head} {base}"),
            None => base.to_string(),
        })
    }

    /// Join `last_word` onto the kept beginning of the phrase.
    pub fn with_last_word(&self, last_word: &str) -> String {
        match self.beginning_of_number.as_deref() {
            Some(head) => format!("{head} {last_word}"),
            None => last_word.to_string(),
        }
    }
}
