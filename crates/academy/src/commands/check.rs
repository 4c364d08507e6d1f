//! `academy check` command implementation.

use academy_site::NavigationIssue;

use super::SiteArgs;
use crate::error::CliError;
use crate::output::Output;

/// Report category and path drift between content and configuration.
///
/// # Errors
///
/// Returns an error if content fails to load or any issue is found.
pub(crate) fn execute(site: &SiteArgs) -> Result<(), CliError> {
    let output = Output::new();
    let site = site.load_site()?;
    let navigation = site.navigation()?;

    output.info(&format!(
        "Checked {} docs and {} pages",
        site.registry().docs().len(),
        site.registry().pages().len()
    ));

    if navigation.issues.is_empty() {
        output.success("No issues found");
        return Ok(());
    }

    for issue in &navigation.issues {
        output.warning(&describe(issue));
    }

    Err(CliError::Validation(format!(
        "{} issue(s) found",
        navigation.issues.len()
    )))
}

fn describe(issue: &NavigationIssue) -> String {
    match issue {
        NavigationIssue::UnknownCategory { category, paths } => {
            format!("Unknown category '{category}' used by: {}", paths.join(", "))
        }
        NavigationIssue::DuplicatePath { path } => {
            format!("Duplicate path '{path}' (first document wins)")
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_describe_unknown_category() {
        let issue = NavigationIssue::UnknownCategory {
            category: "misc".to_owned(),
            paths: vec!["a".to_owned(), "b".to_owned()],
        };
        assert_eq!(describe(&issue), "Unknown category 'misc' used by: a, b");
    }

    #[test]
    fn test_describe_duplicate_path() {
        let issue = NavigationIssue::DuplicatePath {
            path: "intro".to_owned(),
        };
        assert_eq!(describe(&issue), "Duplicate path 'intro' (first document wins)");
    }
}
