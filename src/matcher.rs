use crate::catalog::{Catalog, LocaleNames};
use crate::extractor::extract_datetimes;
use crate::generator::RegexGenerator;
use crate::lexer::tokenize;
use crate::token::SUPPORTED_FORMAT_CODES;
use chrono::NaiveDateTime;
use regex::{Captures, Error, Match, Regex};
use std::fmt::Write;

/// The convenience front end over the tokenize/generate/extract pipeline:
/// hand it a dfregex and a text and it searches, substitutes, or pulls
/// structured datetimes out, compiling the conventional regex behind the
/// scenes. The only errors it reports are the host engine rejecting a
/// pattern, which can happen when the ordinary-regex portions of a dfregex
/// are malformed; those portions are passed through unvalidated.
#[derive(Clone, Debug)]
pub struct DatetimeMatcher {
    generator: RegexGenerator,
}

impl DatetimeMatcher {
    /// A matcher over the default (English) locale names.
    pub fn new() -> DatetimeMatcher {
        DatetimeMatcher::with_locale(&LocaleNames::default())
    }
    /// A matcher whose weekday/month/AM-PM alternations come from the given
    /// locale names.
    pub fn with_locale(locale: &LocaleNames) -> DatetimeMatcher {
        DatetimeMatcher {
            generator: RegexGenerator::new(Catalog::new(locale)),
        }
    }
    /// Converts a dfregex to its corresponding conventional regex. With
    /// `capture` set, each format code becomes an ordinally-named capturing
    /// group; otherwise format codes match without capturing.
    ///
    /// ```rust
    /// # use dfregex::DatetimeMatcher;
    /// let dm = DatetimeMatcher::new();
    /// assert_eq!(
    ///     dm.to_regex(r"%Y-%m-%d", false),
    ///     r"(?:[0-9]{4})-(?:0[1-9]|1[0-2])-(?:0[1-9]|[12][0-9]|3[01])"
    /// );
    /// ```
    pub fn to_regex(&self, dfregex: &str, capture: bool) -> String {
        self.generator.generate(&tokenize(dfregex), capture)
    }
    /// Whether the dfregex matches anywhere in `text`.
    pub fn is_match(&self, dfregex: &str, text: &str) -> Result<bool, Error> {
        Ok(Regex::new(&self.to_regex(dfregex, false))?.is_match(text))
    }
    /// The leftmost match of the dfregex in `text`, if any.
    pub fn search<'t>(&self, dfregex: &str, text: &'t str) -> Result<Option<Match<'t>>, Error> {
        Ok(Regex::new(&self.to_regex(dfregex, false))?.find(text))
    }
    /// The datetime reconstructed from the leftmost match, if that match
    /// both exists and parses.
    ///
    /// ```rust
    /// # use dfregex::DatetimeMatcher;
    /// use chrono::Timelike;
    /// let dm = DatetimeMatcher::new();
    /// let dt = dm
    ///     .extract_datetime(r"%-I:%M %p", "The time is 9:05 AM.")
    ///     .unwrap()
    ///     .unwrap();
    /// assert_eq!((dt.hour(), dt.minute()), (9, 5));
    /// ```
    pub fn extract_datetime(
        &self,
        dfregex: &str,
        text: &str,
    ) -> Result<Option<NaiveDateTime>, Error> {
        let tokens = tokenize(dfregex);
        let rx = self.generator.generate(&tokens, true);
        Ok(extract_datetimes(&rx, &tokens, text, 1)?.next().flatten())
    }
    /// Every successfully extracted datetime, left to right, up to `count`
    /// of them (0 for unlimited). Matches whose captures do not form a valid
    /// datetime are dropped here; use [`extract_datetimes`] directly to keep
    /// the one-slot-per-match correspondence.
    ///
    /// [`extract_datetimes`]: crate::extract_datetimes
    pub fn extract_datetimes(
        &self,
        dfregex: &str,
        text: &str,
        count: usize,
    ) -> Result<Vec<NaiveDateTime>, Error> {
        let tokens = tokenize(dfregex);
        let rx = self.generator.generate(&tokens, true);
        let mut found = Vec::new();
        for maybe in extract_datetimes(&rx, &tokens, text, 0)? {
            if count > 0 && found.len() >= count {
                break;
            }
            if let Some(dt) = maybe {
                found.push(dt);
            }
        }
        Ok(found)
    }
    /// Replaces up to `count` matches of the dfregex in `text` (0 for all)
    /// with `replacement`. For each match the extracted datetime, when there
    /// is one, is first rendered into the replacement via strftime, after
    /// which `$group` references are expanded from the match; a match with no
    /// extractable datetime expands the replacement as given.
    pub fn sub(
        &self,
        dfregex: &str,
        replacement: &str,
        text: &str,
        count: usize,
    ) -> Result<String, Error> {
        let tokens = tokenize(dfregex);
        let plain = Regex::new(&self.generator.generate(&tokens, false))?;
        let capture = self.generator.generate(&tokens, true);
        // the capture pattern matches the same spans as the plain one, so
        // the two walks stay in lockstep
        let mut datetimes = extract_datetimes(&capture, &tokens, text, count)?;
        Ok(plain
            .replacen(text, count, |caps: &Captures| {
                let template = match datetimes.next().flatten() {
                    Some(dt) => strftime_lossy(&dt, replacement),
                    None => replacement.to_string(),
                };
                let mut dst = String::new();
                caps.expand(&template, &mut dst);
                dst
            })
            .into_owned())
    }
    /// The identifiers of every supported format code, `-`-prefixed entries
    /// being the unpadded variants.
    pub fn supported_format_codes(&self) -> &'static [&'static str] {
        &SUPPORTED_FORMAT_CODES
    }
}

impl Default for DatetimeMatcher {
    fn default() -> DatetimeMatcher {
        DatetimeMatcher::new()
    }
}

// strftime rendering of a replacement template; a template chrono cannot
// format comes back unrendered
fn strftime_lossy(dt: &NaiveDateTime, template: &str) -> String {
    let mut out = String::new();
    if write!(out, "{}", dt.format(&microsecond_template(template))).is_err() {
        return template.to_string();
    }
    out
}

// chrono's bare %f renders nine nanosecond digits; %6f is the six-digit
// microsecond field %f stands for everywhere else in this crate
fn microsecond_template(template: &str) -> String {
    let mut out = String::with_capacity(template.len());
    let mut chars = template.chars();
    while let Some(c) = chars.next() {
        out.push(c);
        if c == '%' {
            match chars.next() {
                Some('f') => out.push_str("6f"),
                Some(next) => out.push(next),
                None => {}
            }
        }
    }
    out
}
