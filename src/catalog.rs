use std::collections::HashMap;

/// The locale-dependent name lists the catalog is built from: weekday and
/// month names, full and abbreviated, in calendar order, plus the two AM/PM
/// markers. The `Default` impl carries the C-locale English names, which are
/// also the only names the extraction-side datetime parser understands; a
/// foreign locale will still *match* its names, but extraction of those
/// fields then reports failure.
#[derive(Clone, Debug)]
pub struct LocaleNames {
    pub weekdays: Vec<String>,
    pub weekdays_abbr: Vec<String>,
    pub months: Vec<String>,
    pub months_abbr: Vec<String>,
    pub am_pm: [String; 2],
}

impl Default for LocaleNames {
    fn default() -> LocaleNames {
        fn own(names: &[&str]) -> Vec<String> {
            names.iter().map(|s| s.to_string()).collect()
        }
        LocaleNames {
            weekdays: own(&[
                "Monday",
                "Tuesday",
                "Wednesday",
                "Thursday",
                "Friday",
                "Saturday",
                "Sunday",
            ]),
            weekdays_abbr: own(&["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"]),
            months: own(&[
                "January",
                "February",
                "March",
                "April",
                "May",
                "June",
                "July",
                "August",
                "September",
                "October",
                "November",
                "December",
            ]),
            months_abbr: own(&[
                "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
            ]),
            am_pm: ["AM".to_string(), "PM".to_string()],
        }
    }
}

/// The frozen mapping from format-code identifier to the regex fragment
/// matching every textual rendering the corresponding strftime code can
/// produce, and nothing semantically invalid beyond that. Built once from a
/// `LocaleNames` and read-only afterwards, so it can be shared freely.
#[derive(Clone, Debug)]
pub struct Catalog {
    fragments: HashMap<&'static str, String>,
}

impl Catalog {
    pub fn new(locale: &LocaleNames) -> Catalog {
        let mut fragments = HashMap::new();
        let mut put = |identifier: &'static str, fragment: String| {
            fragments.insert(identifier, fragment);
        };
        put("a", locale.weekdays_abbr.join("|"));
        put("A", locale.weekdays.join("|"));
        put("w", r"[0-6]".to_string());
        put("d", r"0[1-9]|[12][0-9]|3[01]".to_string());
        put("-d", r"[1-9]|[12][0-9]|3[01]".to_string());
        put("b", locale.months_abbr.join("|"));
        put("B", locale.months.join("|"));
        put("m", r"0[1-9]|1[0-2]".to_string());
        put("-m", r"[1-9]|1[0-2]".to_string());
        put("y", r"[0-9]{2}".to_string());
        put("Y", r"[0-9]{4}".to_string());
        put("H", r"[01][0-9]|2[0-3]".to_string());
        put("-H", r"[0-9]|1[0-9]|2[0-3]".to_string());
        put("I", r"0[1-9]|1[0-2]".to_string());
        put("-I", r"[1-9]|1[0-2]".to_string());
        put("p", locale.am_pm.join("|"));
        put("M", r"[0-5][0-9]".to_string());
        put("-M", r"[0-9]|[1-5][0-9]".to_string());
        put("S", r"[0-5][0-9]".to_string());
        put("-S", r"[0-9]|[1-5][0-9]".to_string());
        put("f", r"[0-9]{6}".to_string());
        put(
            "z",
            r"[\+\-](?:[01][0-9]|2[0-3])[0-5][0-9](?:[0-5][0-9](?:\.[0-9]{6})?)?".to_string(),
        );
        put("j", r"[0-2][0-9]{2}|3[0-5][0-9]|36[0-6]".to_string());
        // the low end of this range admits a bare 0
        put(
            "-j",
            r"[0-9]|[1-9][0-9]|[1-2][0-9]{2}|3[0-5][0-9]|36[0-6]".to_string(),
        );
        put("U", r"[0-4][0-9]|5[0-3]".to_string());
        put("W", r"[0-4][0-9]|5[0-3]".to_string());
        Catalog { fragments }
    }

    /// The fragment for a format-code identifier (without its `%`), or `None`
    /// for an identifier outside the supported set.
    pub fn fragment(&self, identifier: &str) -> Option<&str> {
        self.fragments.get(identifier).map(|s| s.as_str())
    }
}
