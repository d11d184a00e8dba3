//! Grouped decimal parsing for quote rate strings such as `"11,486.5341"`.

use anyhow::{Context, Result, anyhow, bail};
use serde::{Deserialize, Serialize};

/// Separators used by a quote's rate strings.
///
/// Parsing is lenient in the same way a locale number parser is: a leading
/// `-` is accepted, grouping separators anywhere in the integer part are
/// skipped (`",123"` and `"1,,2"` included), and anything after the longest
/// valid number prefix is ignored. At least one digit must be present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NumberFormat {
    pub grouping_separator: char,
    pub decimal_separator: char,
}

impl Default for NumberFormat {
    fn default() -> Self {
        NumberFormat {
            grouping_separator: ',',
            decimal_separator: '.',
        }
    }
}

impl NumberFormat {
    pub fn new(grouping_separator: char, decimal_separator: char) -> Result<Self> {
        let format = NumberFormat {
            grouping_separator,
            decimal_separator,
        };
        format.validate()?;
        Ok(format)
    }

    pub fn validate(&self) -> Result<()> {
        if self.grouping_separator == self.decimal_separator {
            bail!(
                "Grouping and decimal separators must differ, both are {:?}",
                self.grouping_separator
            );
        }
        for sep in [self.grouping_separator, self.decimal_separator] {
            if sep.is_ascii_digit() || sep == '-' {
                bail!("Invalid number separator: {:?}", sep);
            }
        }
        Ok(())
    }

    pub fn parse(&self, input: &str) -> Result<f64> {
        let chars: Vec<char> = input.chars().collect();
        let mut normalized = String::with_capacity(chars.len());
        let mut pos = 0;
        let mut digits = 0;

        if chars.first() == Some(&'-') {
            normalized.push('-');
            pos += 1;
        }

        let is_digit_at = |i: usize| chars.get(i).is_some_and(|c| c.is_ascii_digit());

        while pos < chars.len() {
            let c = chars[pos];
            if c.is_ascii_digit() {
                normalized.push(c);
                digits += 1;
            } else if c != self.grouping_separator {
                break;
            }
            pos += 1;
        }

        if chars.get(pos) == Some(&self.decimal_separator) {
            normalized.push('.');
            pos += 1;
            while is_digit_at(pos) {
                normalized.push(chars[pos]);
                digits += 1;
                pos += 1;
            }
        }

        if digits == 0 {
            return Err(anyhow!("Unparseable number: {:?}", input));
        }

        normalized
            .parse::<f64>()
            .with_context(|| format!("Unparseable number: {input:?}"))
    }
}
