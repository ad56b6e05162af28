//! Headless dashboard sessions
//!
//! A line-oriented command language that drives one [`Dashboard`] the way
//! the UI's event handlers do. Used by `dinedash session` to script and
//! replay interactions.
//!
//! ```text
//! select restaurants
//! add name="Nori House" city=Seattle cuisine=Japanese partner="Standard Partner"
//! edit 3 status=active
//! delete 4
//! page-size 5
//! page 2
//! filter partner "Premium Partner"
//! investigate a1
//! anomaly-filter critical
//! analytics-filter city Austin
//! ```
//!
//! Page numbers are 1-based here; the cursor underneath is 0-based.

use std::str::FromStr;

use nom::{
    branch::alt,
    bytes::complete::{take_while, take_while1},
    character::complete::{char, multispace0, multispace1},
    combinator::all_consuming,
    multi::{fold_many1, separated_list0},
    sequence::delimited,
    IResult,
};

use crate::dashboard::Dashboard;
use crate::error::{DashboardError, DashboardResult};
use crate::store::Patch;
use crate::view::{SaveOutcome, Section};
use crate::workflow::{AnomalyAction, TransitionOutcome};

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Select(Section),
    Add(Patch),
    Edit(u32, Patch),
    Delete(u32),
    Show(u32),
    Anomaly(AnomalyAction, String),
    Dismiss(String),
    Page(usize),
    PageSize(usize),
    Filter(String, String),
    AnomalyFilter(String),
    AnalyticsFilter(String, String),
}

/// A double-quoted run; the quotes are dropped
fn quoted(input: &str) -> IResult<&str, &str> {
    delimited(char('"'), take_while(|c: char| c != '"'), char('"'))(input)
}

/// An unquoted run up to whitespace or a quote
fn bare(input: &str) -> IResult<&str, &str> {
    take_while1(|c: char| !c.is_whitespace() && c != '"')(input)
}

/// One word, e.g. `name="Nori House"` becomes `name=Nori House`
fn token(input: &str) -> IResult<&str, String> {
    fold_many1(alt((quoted, bare)), String::new, |mut word, part| {
        word.push_str(part);
        word
    })(input)
}

fn tokens(input: &str) -> IResult<&str, Vec<String>> {
    delimited(multispace0, separated_list0(multispace1, token), multispace0)(input)
}

/// Split a line into words, honouring double quotes
fn tokenize(line: &str) -> DashboardResult<Vec<String>> {
    all_consuming(tokens)(line)
        .map(|(_, words)| words)
        .map_err(|_| DashboardError::InvalidValue {
            field: "command".to_string(),
            value: line.to_string(),
        })
}

fn invalid(field: &str, value: &str) -> DashboardError {
    DashboardError::InvalidValue {
        field: field.to_string(),
        value: value.to_string(),
    }
}

fn number<T: FromStr>(field: &str, value: Option<&String>) -> DashboardResult<T> {
    let value = value.ok_or_else(|| invalid(field, ""))?;
    value.parse().map_err(|_| invalid(field, value))
}

fn word<'a>(field: &str, value: Option<&'a String>) -> DashboardResult<&'a str> {
    value.map(String::as_str).ok_or_else(|| invalid(field, ""))
}

impl Command {
    /// Parse one line; blank lines and `#` comments yield `None`
    pub fn parse(line: &str) -> DashboardResult<Option<Command>> {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            return Ok(None);
        }

        let tokens = tokenize(trimmed)?;
        let (verb, args) = match tokens.split_first() {
            Some((verb, args)) => (verb.to_lowercase(), args),
            None => return Ok(None),
        };
        let patch = || Patch::from_pairs(args.iter().skip(1).map(String::as_str));

        let command = match verb.as_str() {
            "select" | "go" => Command::Select(word("section", args.first())?.parse()?),
            "add" => Command::Add(Patch::from_pairs(args.iter().map(String::as_str))),
            "edit" => Command::Edit(number("id", args.first())?, patch()),
            "delete" => Command::Delete(number("id", args.first())?),
            "show" => Command::Show(number("id", args.first())?),
            "investigate" | "resolve" | "reopen" => Command::Anomaly(
                verb.parse()?,
                word("anomaly", args.first())?.to_string(),
            ),
            "dismiss" => Command::Dismiss(word("anomaly", args.first())?.to_string()),
            "page" => {
                let page: usize = number("page", args.first())?;
                if page == 0 {
                    return Err(invalid("page", "0"));
                }
                Command::Page(page)
            }
            "page-size" => Command::PageSize(number("page-size", args.first())?),
            "filter" => Command::Filter(
                word("filter", args.first())?.to_string(),
                word("selection", args.get(1))?.to_string(),
            ),
            "anomaly-filter" => {
                Command::AnomalyFilter(word("filter", args.first())?.to_string())
            }
            "analytics-filter" => Command::AnalyticsFilter(
                word("filter", args.first())?.to_string(),
                word("selection", args.get(1))?.to_string(),
            ),
            _ => return Err(invalid("command", &verb)),
        };
        Ok(Some(command))
    }
}

impl Dashboard {
    /// Run one command and describe what happened
    pub fn apply(&mut self, command: Command) -> DashboardResult<String> {
        let message = match command {
            Command::Select(section) => {
                let ticket = self.select_section(section);
                self.commit_section(ticket);
                format!("section: {}", section.title())
            }
            Command::Add(patch) => {
                self.open_restaurant_create();
                describe_save(self.fill_and_save(&patch)?)
            }
            Command::Edit(id, patch) => {
                if !self.open_restaurant_edit(id) {
                    return Ok(format!("restaurant {} not found", id));
                }
                describe_save(self.fill_and_save(&patch)?)
            }
            Command::Delete(id) => match self.delete_restaurant(id) {
                Some(removed) => format!("deleted {} ({})", removed.name, id),
                None => format!("restaurant {} not found", id),
            },
            Command::Show(id) => {
                if self.show_restaurant(id) {
                    format!("showing restaurant {}", id)
                } else {
                    format!("restaurant {} not found", id)
                }
            }
            Command::Anomaly(action, id) => match self.apply_anomaly_action(&id, action) {
                TransitionOutcome::Applied { from, to } => format!("{}: {} -> {}", id, from, to),
                TransitionOutcome::Rejected { status } => {
                    format!("{}: cannot {} while {}", id, action, status)
                }
                TransitionOutcome::NotFound => format!("anomaly {} not found", id),
            },
            Command::Dismiss(id) => match self.dismiss_anomaly(&id) {
                Some(_) => format!("dismissed {}", id),
                None => format!("anomaly {} not found", id),
            },
            Command::Page(page) => {
                self.set_page(page - 1);
                format!("page {}", self.pagination().page() + 1)
            }
            Command::PageSize(size) => {
                self.set_page_size(size);
                format!("page size {}", self.pagination().page_size())
            }
            Command::Filter(key, selection) => {
                self.set_restaurant_filter(&key, &selection)?;
                format!("filter {} = {}", key, self.restaurant_filter().selection(&key))
            }
            Command::AnomalyFilter(key) => {
                self.set_anomaly_filter(&key)?;
                format!("anomaly filter {}", self.anomaly_filter().key())
            }
            Command::AnalyticsFilter(key, selection) => {
                self.set_analytics_filter(&key, &selection)?;
                format!("analytics filter {} = {}", key, selection)
            }
        };
        tracing::debug!(%message, "session command");
        Ok(message)
    }

    /// Fill the open form from a patch and save; any failure discards the form
    fn fill_and_save(&mut self, patch: &Patch) -> DashboardResult<SaveOutcome> {
        let mut result = Ok(());
        for (key, value) in patch.iter() {
            result = self.update_restaurant_field(key, value);
            if result.is_err() {
                break;
            }
        }
        let result = result.and_then(|_| self.save_restaurant());
        if result.is_err() {
            self.cancel_restaurant_form();
        }
        result
    }

    /// Parse and run a script; stops at the first failing line
    pub fn run_script(&mut self, script: &str) -> DashboardResult<Vec<String>> {
        let mut messages = Vec::new();
        for line in script.lines() {
            if let Some(command) = Command::parse(line)? {
                messages.push(self.apply(command)?);
            }
        }
        Ok(messages)
    }
}

fn describe_save(outcome: SaveOutcome) -> String {
    match outcome {
        SaveOutcome::Created(id) => format!("added restaurant {}", id),
        SaveOutcome::Updated(id) => format!("updated restaurant {}", id),
        SaveOutcome::Gone(id) => format!("restaurant {} no longer exists", id),
        SaveOutcome::Blocked(missing) => {
            format!("not saved, required: {}", missing.join(", "))
        }
        SaveOutcome::NotOpen => "no form open".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::RestaurantStatus;
    use crate::provider::SeedProvider;

    #[test]
    fn test_tokenize_quotes() {
        let tokens = tokenize(r#"add name="Nori House" city=Seattle"#).unwrap();
        assert_eq!(tokens, vec!["add", "name=Nori House", "city=Seattle"]);

        let tokens = tokenize(r#"filter partner "Premium Partner""#).unwrap();
        assert_eq!(tokens, vec!["filter", "partner", "Premium Partner"]);

        assert_eq!(tokenize(r#"x """#).unwrap(), vec!["x", ""]);
        assert!(tokenize(r#"add name="open"#).is_err());
        assert!(tokenize(r#"add "open"#).is_err());

        let tokens = tokenize("  page-size \t 5  ").unwrap();
        assert_eq!(tokens, vec!["page-size", "5"]);
        assert!(tokenize("   ").unwrap().is_empty());
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!(Command::parse("  # comment").unwrap(), None);
        assert_eq!(Command::parse("").unwrap(), None);
        assert_eq!(
            Command::parse("select anomalies").unwrap(),
            Some(Command::Select(Section::Anomalies))
        );
        assert_eq!(
            Command::parse("resolve a2").unwrap(),
            Some(Command::Anomaly(AnomalyAction::Resolve, "a2".to_string()))
        );
        assert!(Command::parse("select reports").is_err());
        assert!(Command::parse("delete x").is_err());
        assert!(Command::parse("page 0").is_err());
        assert!(Command::parse("launch").is_err());
    }

    #[test]
    fn test_script() {
        let mut dashboard = Dashboard::new(&SeedProvider);
        let messages = dashboard
            .run_script(
                r#"
                select restaurants
                add name="Nori House" city=Seattle cuisine=Japanese partner="Standard Partner"
                edit 3 status=active
                delete 4
                investigate a1
                resolve a1
                resolve a1
                "#,
            )
            .unwrap();

        assert_eq!(dashboard.section(), Section::Restaurants);
        assert_eq!(messages[1], "added restaurant 6");
        assert_eq!(
            dashboard.restaurant(3).unwrap().status,
            RestaurantStatus::Active
        );
        assert!(dashboard.restaurant(4).is_none());
        assert_eq!(messages[4], "a1: active -> investigating");
        assert_eq!(messages[6], "a1: cannot resolve while resolved");
    }

    #[test]
    fn test_edit_with_bad_field_closes_form() {
        let mut dashboard = Dashboard::new(&SeedProvider);
        let result = dashboard.apply(Command::Edit(1, Patch::new().set("revenue", "5")));
        assert!(result.is_err());
        assert!(!dashboard.restaurant_form().is_open());
    }

    #[test]
    fn test_paging_is_one_based() {
        let mut dashboard = Dashboard::new(&SeedProvider);
        let messages = dashboard.run_script("page-size 2\npage 3\npage 9").unwrap();
        assert_eq!(messages, vec!["page size 2", "page 3", "page 3"]);
    }
}
