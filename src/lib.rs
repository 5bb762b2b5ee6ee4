/*!
Regular expressions with strftime datetime format codes embedded in them.

A dfregex is ordinary regex text with codes such as `%Y`, `%-d`, or `%p`
mixed in wherever a datetime field should match. The crate compiles such a
pattern into a conventional regex for the [`regex`] engine and can
reconstruct a [`chrono::NaiveDateTime`] from every match.

```rust
use dfregex::DatetimeMatcher;
use chrono::NaiveDate;

let dm = DatetimeMatcher::new();
let extracted = dm
    .extract_datetime(r"(\w+?)_%Y-%b-%d\.jpe?g", "holiday_2011-Jul-05.jpg")
    .unwrap();
let expected = NaiveDate::from_ymd_opt(2011, 7, 5).unwrap().and_hms_opt(0, 0, 0).unwrap();
assert_eq!(extracted, Some(expected));
```
*/
extern crate chrono;
extern crate regex;
extern crate serde;
#[macro_use]
extern crate lazy_static;

mod catalog;
mod extractor;
mod generator;
mod lexer;
mod matcher;
mod token;
pub use catalog::{Catalog, LocaleNames};
pub use extractor::{extract_datetimes, Extractions};
pub use generator::RegexGenerator;
pub use lexer::tokenize;
pub use matcher::DatetimeMatcher;
pub use token::{Token, TokenKind, SUPPORTED_FORMAT_CODES};
