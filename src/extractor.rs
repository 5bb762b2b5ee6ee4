use crate::generator::GROUP_PREFIX;
use crate::token::{Token, TokenKind};
use chrono::NaiveDateTime;
use regex::{Captures, Error, Regex};

// joins format codes and captured values into the composite strings handed
// to the datetime parser; absent from every catalog fragment, so it can
// never collide with captured text
const SEPARATOR: char = '#';

/// Runs a capture-enabled pattern over `text` and reconstructs a datetime
/// from each match.
///
/// `tokens` must be the token sequence the pattern was generated from; its
/// format-code tokens, in order, are what the pattern's `DF___N` groups refer
/// back to. The returned iterator yields exactly one element per regex match,
/// in match order, up to `count` matches (0 for unlimited). A match whose
/// captures do not combine into a valid datetime yields `None` in its slot
/// rather than being skipped, so callers can zip matches with extractions
/// positionally.
///
/// The only failure is the host engine rejecting the pattern itself.
pub fn extract_datetimes<'t>(
    extraction_regex: &str,
    tokens: &[Token],
    text: &'t str,
    count: usize,
) -> Result<Extractions<'t>, Error> {
    let rx = Regex::new(extraction_regex)?;
    let format_codes = tokens
        .iter()
        .filter(|t| t.kind == TokenKind::FormatCode)
        .map(|t| t.value.clone())
        .collect();
    Ok(Extractions {
        rx,
        format_codes,
        text,
        pos: 0,
        yielded: 0,
        count,
        done: false,
    })
}

/// Lazy iterator over per-match extraction results. Owns its compiled regex
/// and walks `text` left to right, non-overlapping.
#[derive(Debug)]
pub struct Extractions<'t> {
    rx: Regex,
    format_codes: Vec<String>,
    text: &'t str,
    pos: usize,
    yielded: usize,
    count: usize,
    done: bool,
}

impl<'t> Iterator for Extractions<'t> {
    type Item = Option<NaiveDateTime>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done || (self.count > 0 && self.yielded >= self.count) || self.pos > self.text.len()
        {
            self.done = true;
            return None;
        }
        let caps = match self.rx.captures_at(self.text, self.pos) {
            Some(caps) => caps,
            None => {
                self.done = true;
                return None;
            }
        };
        let whole = caps.get(0).unwrap();
        self.pos = if whole.start() == whole.end() {
            past_next_char(self.text, whole.end())
        } else {
            whole.end()
        };
        self.yielded += 1;
        Some(self.reconstruct(&caps))
    }
}

impl<'t> Extractions<'t> {
    // pairs each DF___N group with the Nth format-code token, joins both
    // sides into composite strings, and hands them to the datetime parser
    fn reconstruct(&self, caps: &Captures) -> Option<NaiveDateTime> {
        let mut identifiers: Vec<&str> = Vec::new();
        let mut format = String::new();
        let mut value = String::new();
        for (ordinal, code) in self.format_codes.iter().enumerate() {
            let group = format!("{}{}", GROUP_PREFIX, ordinal);
            let captured = match caps.name(&group) {
                Some(m) => m,
                // partial group sets are tolerated per match, not fatal
                None => continue,
            };
            if !identifiers.is_empty() {
                format.push(SEPARATOR);
                value.push(SEPARATOR);
            }
            let identifier = &code[1..];
            if identifier == "f" {
                // chrono reads a bare %f as a literal nanosecond count; %6f
                // is the six-digit microsecond field that strftime's %f
                // renders
                format.push_str("%6f");
            } else {
                format.push_str(code);
            }
            value.push_str(captured.as_str());
            identifiers.push(identifier);
        }
        if identifiers.is_empty() {
            return None;
        }
        complete_composite(&identifiers, &mut format, &mut value);
        NaiveDateTime::parse_from_str(&value, &format).ok()
    }
}

// strptime-style defaults: calendar and clock fields the composite format
// never mentions fall back to 1900-01-01 midnight, appended as further
// composite segments so the parser always sees a resolvable instant
fn complete_composite(identifiers: &[&str], format: &mut String, value: &mut String) {
    let has = |options: &[&str]| identifiers.iter().any(|i| options.contains(i));
    let mut append = |code: &str, default: &str| {
        format.push(SEPARATOR);
        format.push_str(code);
        value.push(SEPARATOR);
        value.push_str(default);
    };
    if !has(&["Y", "y"]) {
        append("%Y", "1900");
    }
    // day-of-year and week numbers anchor the date themselves; defaulting
    // month or day on top of them would only manufacture contradictions
    if !has(&["j", "-j", "U", "W"]) {
        if !has(&["m", "-m", "b", "B"]) {
            append("%m", "01");
        }
        if !has(&["d", "-d"]) {
            append("%d", "01");
        }
    }
    if has(&["I", "-I"]) {
        if !has(&["p"]) {
            append("%p", "AM");
        }
    } else if !has(&["H", "-H"]) {
        append("%H", "00");
    }
    if !has(&["M", "-M"]) {
        append("%M", "00");
    }
}

// smallest index past `from` that is a char boundary; keeps empty matches
// from stalling the iterator
fn past_next_char(text: &str, from: usize) -> usize {
    let mut next = from + 1;
    while next < text.len() && !text.is_char_boundary(next) {
        next += 1;
    }
    next
}

#[cfg(test)]
mod tests {
    use super::{complete_composite, extract_datetimes};
    use crate::catalog::{Catalog, LocaleNames};
    use crate::generator::RegexGenerator;
    use crate::lexer::tokenize;
    use chrono::{NaiveDate, Timelike};

    fn pipeline(dfregex: &str) -> (Vec<crate::token::Token>, String) {
        let tokens = tokenize(dfregex);
        let rx = RegexGenerator::new(Catalog::new(&LocaleNames::default())).generate(&tokens, true);
        (tokens, rx)
    }

    #[test]
    fn single_match_single_result() {
        let (tokens, rx) = pipeline("%Y-%m-%d");
        let results: Vec<_> = extract_datetimes(&rx, &tokens, "born 1997-08-29, reborn never", 0)
            .unwrap()
            .collect();
        assert_eq!(
            results,
            vec![Some(NaiveDate::from_ymd_opt(1997, 8, 29).unwrap().and_hms_opt(0, 0, 0).unwrap())]
        );
    }

    #[test]
    fn limit_zero_means_every_match() {
        let (tokens, rx) = pipeline("%Y");
        let text = "1970 1971 1972 1973";
        assert_eq!(extract_datetimes(&rx, &tokens, text, 0).unwrap().count(), 4);
        assert_eq!(extract_datetimes(&rx, &tokens, text, 2).unwrap().count(), 2);
        assert_eq!(extract_datetimes(&rx, &tokens, text, 9).unwrap().count(), 4);
    }

    #[test]
    fn unparseable_match_occupies_a_slot() {
        let (tokens, rx) = pipeline("%Y-%m-%d");
        let text = "bad: 2021-02-31, good: 2021-03-05";
        let results: Vec<_> = extract_datetimes(&rx, &tokens, text, 0).unwrap().collect();
        assert_eq!(results.len(), 2);
        assert_eq!(results[0], None);
        assert_eq!(
            results[1],
            Some(NaiveDate::from_ymd_opt(2021, 3, 5).unwrap().and_hms_opt(0, 0, 0).unwrap())
        );
    }

    #[test]
    fn twelve_hour_clock_resolves_am_pm() {
        let (tokens, rx) = pipeline(r"%-I:%M %p");
        let results: Vec<_> = extract_datetimes(&rx, &tokens, "at 9:05 AM and 9:05 PM", 0)
            .unwrap()
            .collect();
        let hours: Vec<u32> = results
            .iter()
            .map(|r| r.unwrap().hour())
            .collect();
        assert_eq!(hours, vec![9, 21]);
    }

    #[test]
    fn microseconds_scale_correctly() {
        let (tokens, rx) = pipeline(r"%H:%M:%S\.%f");
        let results: Vec<_> = extract_datetimes(&rx, &tokens, "t = 12:34:56.123456", 0)
            .unwrap()
            .collect();
        assert_eq!(results[0].unwrap().nanosecond(), 123_456_000);
    }

    #[test]
    fn empty_pattern_still_yields_one_result_per_match() {
        // an all-miss token stream generates an empty pattern, which matches
        // at every position; each of those matches must surface as a slot
        let tokens = vec![crate::token::Token::new(
            crate::token::TokenKind::FormatCode,
            "%Q",
        )];
        let results: Vec<_> = extract_datetimes("", &tokens, "ab", 0).unwrap().collect();
        assert_eq!(results, vec![None, None, None]);
    }

    #[test]
    fn completion_fills_only_missing_fields() {
        let mut format = String::from("%Y");
        let mut value = String::from("1997");
        complete_composite(&["Y"], &mut format, &mut value);
        assert_eq!(format, "%Y#%m#%d#%H#%M");
        assert_eq!(value, "1997#01#01#00#00");

        let mut format = String::from("%-j");
        let mut value = String::from("60");
        complete_composite(&["-j"], &mut format, &mut value);
        assert_eq!(format, "%-j#%Y#%H#%M");
        assert_eq!(value, "60#1900#00#00");
    }
}
