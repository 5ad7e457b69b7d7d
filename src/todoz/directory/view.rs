use crate::model::User;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortField {
    #[default]
    FirstName,
    Email,
}

impl SortField {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortField::FirstName => "first_name",
            SortField::Email => "email",
        }
    }

    fn value<'a>(&self, user: &'a User) -> &'a str {
        match self {
            SortField::FirstName => &user.first_name,
            SortField::Email => &user.email,
        }
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "first_name" => Ok(SortField::FirstName),
            "email" => Ok(SortField::Email),
            other => Err(format!(
                "unknown sort field '{}' (expected first_name or email)",
                other
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    pub fn toggled(self) -> Self {
        match self {
            SortOrder::Asc => SortOrder::Desc,
            SortOrder::Desc => SortOrder::Asc,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }

    pub fn marker(&self) -> &'static str {
        match self {
            SortOrder::Asc => "▲",
            SortOrder::Desc => "▼",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(SortOrder::Asc),
            "desc" => Ok(SortOrder::Desc),
            other => Err(format!("unknown sort order '{}' (expected asc or desc)", other)),
        }
    }
}

/// Email domain restriction. `All` is the "no filter" sentinel, spelled exactly
/// `all`; an empty value also means no filter.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DomainFilter {
    #[default]
    All,
    Domain(String),
}

impl fmt::Display for DomainFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DomainFilter::All => f.write_str("all"),
            DomainFilter::Domain(d) => f.write_str(d),
        }
    }
}

impl FromStr for DomainFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() || s == "all" {
            Ok(DomainFilter::All)
        } else {
            Ok(DomainFilter::Domain(s.to_string()))
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewOptions {
    pub search: String,
    pub domain: DomainFilter,
    pub sort_field: SortField,
    pub sort_order: SortOrder,
}

impl ViewOptions {
    /// Header click semantics: the active field flips its order, any other field
    /// becomes active in ascending order.
    pub fn toggle_sort(&mut self, field: SortField) {
        if field == self.sort_field {
            self.sort_order = self.sort_order.toggled();
        } else {
            self.sort_field = field;
            self.sort_order = SortOrder::Asc;
        }
    }
}

/// Distinct email domains in first-seen order.
///
/// The domain is whatever sits between the first `@` and the next one, so
/// `a@b@c` contributes `b`. Emails with nothing after the `@` are skipped.
pub fn email_domains(users: &[User]) -> Vec<String> {
    let mut domains: Vec<String> = Vec::new();
    for user in users {
        let Some(domain) = user.email.split('@').nth(1) else {
            continue;
        };
        if !domain.is_empty() && !domains.iter().any(|d| d == domain) {
            domains.push(domain.to_string());
        }
    }
    domains
}

/// Case-insensitive substring match on full name or email.
///
/// The emptiness check trims the term; the match itself does not.
pub fn matches_search(user: &User, term: &str) -> bool {
    if term.trim().is_empty() {
        return true;
    }
    let term = term.to_lowercase();
    user.full_name().to_lowercase().contains(&term) || user.email.to_lowercase().contains(&term)
}

pub fn matches_domain(user: &User, filter: &DomainFilter) -> bool {
    match filter {
        DomainFilter::All => true,
        DomainFilter::Domain(domain) => user.email.ends_with(domain.as_str()),
    }
}

fn compare(a: &User, b: &User, field: SortField, order: SortOrder) -> Ordering {
    let ord = field
        .value(a)
        .to_lowercase()
        .cmp(&field.value(b).to_lowercase());
    match order {
        SortOrder::Asc => ord,
        SortOrder::Desc => ord.reverse(),
    }
}

/// Search, then domain filter, then a stable sort.
pub fn process_users(users: &[User], options: &ViewOptions) -> Vec<User> {
    let mut result: Vec<User> = users
        .iter()
        .filter(|u| matches_search(u, &options.search))
        .filter(|u| matches_domain(u, &options.domain))
        .cloned()
        .collect();
    result.sort_by(|a, b| compare(a, b, options.sort_field, options.sort_order));
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(id: u64, first: &str, last: &str, email: &str) -> User {
        User {
            id,
            first_name: first.into(),
            last_name: last.into(),
            email: email.into(),
            avatar: String::new(),
        }
    }

    fn sample() -> Vec<User> {
        vec![
            user(1, "Bob", "Stone", "b@x.com"),
            user(2, "Amy", "Reed", "a@y.com"),
        ]
    }

    fn names(users: &[User]) -> Vec<&str> {
        users.iter().map(|u| u.first_name.as_str()).collect()
    }

    #[test]
    fn sorts_by_first_name_ascending_by_default() {
        let result = process_users(&sample(), &ViewOptions::default());
        assert_eq!(names(&result), vec!["Amy", "Bob"]);
    }

    #[test]
    fn toggling_active_field_reverses() {
        let mut options = ViewOptions::default();
        options.toggle_sort(SortField::FirstName);
        assert_eq!(options.sort_order, SortOrder::Desc);

        let result = process_users(&sample(), &options);
        assert_eq!(names(&result), vec!["Bob", "Amy"]);

        options.toggle_sort(SortField::FirstName);
        assert_eq!(options.sort_order, SortOrder::Asc);
    }

    #[test]
    fn switching_field_resets_to_ascending() {
        let mut options = ViewOptions {
            sort_order: SortOrder::Desc,
            ..ViewOptions::default()
        };
        options.toggle_sort(SortField::Email);
        assert_eq!(options.sort_field, SortField::Email);
        assert_eq!(options.sort_order, SortOrder::Asc);

        let result = process_users(&sample(), &options);
        assert_eq!(names(&result), vec!["Amy", "Bob"]);
    }

    #[test]
    fn search_is_case_insensitive() {
        for term in ["amy", "AMY", "aMy"] {
            let options = ViewOptions {
                search: term.into(),
                ..ViewOptions::default()
            };
            assert_eq!(names(&process_users(&sample(), &options)), vec!["Amy"]);
        }
    }

    #[test]
    fn search_matches_full_name_and_email() {
        let by_full_name = ViewOptions {
            search: "bob stone".into(),
            ..ViewOptions::default()
        };
        assert_eq!(names(&process_users(&sample(), &by_full_name)), vec!["Bob"]);

        let by_email = ViewOptions {
            search: "@Y.COM".into(),
            ..ViewOptions::default()
        };
        assert_eq!(names(&process_users(&sample(), &by_email)), vec!["Amy"]);
    }

    #[test]
    fn whitespace_search_is_disabled_but_padded_terms_match_literally() {
        let blank = ViewOptions {
            search: "   ".into(),
            ..ViewOptions::default()
        };
        assert_eq!(process_users(&sample(), &blank).len(), 2);

        let padded = ViewOptions {
            search: " amy".into(),
            ..ViewOptions::default()
        };
        assert!(process_users(&sample(), &padded).is_empty());
    }

    #[test]
    fn domain_filter_uses_suffix() {
        let options = ViewOptions {
            domain: DomainFilter::Domain("x.com".into()),
            ..ViewOptions::default()
        };
        assert_eq!(names(&process_users(&sample(), &options)), vec!["Bob"]);
    }

    #[test]
    fn over_restrictive_filters_yield_empty() {
        let options = ViewOptions {
            search: "amy".into(),
            domain: DomainFilter::Domain("x.com".into()),
            ..ViewOptions::default()
        };
        assert!(process_users(&sample(), &options).is_empty());
        assert!(process_users(&[], &ViewOptions::default()).is_empty());
    }

    #[test]
    fn sort_is_stable_for_equal_keys() {
        let users = vec![
            user(1, "sam", "One", "1@a.io"),
            user(2, "Sam", "Two", "2@a.io"),
            user(3, "SAM", "Three", "3@a.io"),
        ];
        let ids: Vec<u64> = process_users(&users, &ViewOptions::default())
            .iter()
            .map(|u| u.id)
            .collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn domains_are_distinct_in_first_seen_order() {
        let users = vec![
            user(1, "a", "", "a@y.com"),
            user(2, "b", "", "b@x.com"),
            user(3, "c", "", "c@y.com"),
            user(4, "d", "", "no-at-sign"),
            user(5, "e", "", "trailing@"),
            user(6, "f", "", "f@z.org@extra"),
        ];
        assert_eq!(email_domains(&users), vec!["y.com", "x.com", "z.org"]);
    }

    #[test]
    fn only_lowercase_all_clears_the_domain() {
        assert_eq!("".parse::<DomainFilter>().unwrap(), DomainFilter::All);
        assert_eq!(
            "ALL".parse::<DomainFilter>().unwrap(),
            DomainFilter::Domain("ALL".into())
        );
        assert_eq!(
            "All".parse::<DomainFilter>().unwrap(),
            DomainFilter::Domain("All".into())
        );
    }

    #[test]
    fn parses_cli_values() {
        assert_eq!("email".parse::<SortField>().unwrap(), SortField::Email);
        assert!("age".parse::<SortField>().is_err());
        assert_eq!("desc".parse::<SortOrder>().unwrap(), SortOrder::Desc);
        assert_eq!("all".parse::<DomainFilter>().unwrap(), DomainFilter::All);
        assert_eq!(
            "x.com".parse::<DomainFilter>().unwrap(),
            DomainFilter::Domain("x.com".into())
        );
    }
}
