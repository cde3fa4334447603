//! Community poll options and vote casting.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::CoreError;
use crate::types::DbId;
use crate::validation::validate_required;

/// Minimum number of options a poll must offer.
pub const MIN_POLL_OPTIONS: usize = 2;

/// One answer in a poll together with its running tally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PollOption {
    pub text: String,
    pub votes: i32,
}

/// Build zero-vote options from the texts supplied by the poll creator.
pub fn build_options(texts: &[String]) -> Result<Vec<PollOption>, CoreError> {
    if texts.len() < MIN_POLL_OPTIONS {
        return Err(CoreError::Validation(format!(
            "A poll needs at least {MIN_POLL_OPTIONS} options"
        )));
    }
    texts
        .iter()
        .map(|text| {
            validate_required("option text", text)?;
            Ok(PollOption {
                text: text.trim().to_string(),
                votes: 0,
            })
        })
        .collect()
}

/// Record `voter`'s choice of `option_index`.
///
/// Checks run in this order: the poll is still open on `today`, the voter
/// has not voted yet, the index names an option. All failures are
/// validation errors.
pub fn cast_vote(
    options: &mut [PollOption],
    voted_by: &mut Vec<DbId>,
    voter: DbId,
    option_index: i64,
    ends_at: NaiveDate,
    today: NaiveDate,
) -> Result<(), CoreError> {
    if today > ends_at {
        return Err(CoreError::Validation(format!("Poll ended on {ends_at}")));
    }
    if voted_by.contains(&voter) {
        return Err(CoreError::Validation("Already voted".into()));
    }
    let option = usize::try_from(option_index)
        .ok()
        .and_then(|i| options.get_mut(i))
        .ok_or_else(|| CoreError::Validation("Invalid option".into()))?;

    option.votes += 1;
    voted_by.push(voter);
    Ok(())
}

/// Total votes cast across all options.
pub fn total_votes(options: &[PollOption]) -> i64 {
    options.iter().map(|o| i64::from(o.votes)).sum()
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, d).unwrap()
    }

    fn options() -> Vec<PollOption> {
        build_options(&["Yes".into(), "No".into(), "Indifferent".into()]).unwrap()
    }

    #[test]
    fn options_start_at_zero_and_are_trimmed() {
        let opts = build_options(&[" Yes ".into(), "No".into()]).unwrap();
        assert_eq!(opts[0].text, "Yes");
        assert_eq!(total_votes(&opts), 0);
    }

    #[test]
    fn single_option_rejected() {
        assert!(build_options(&["Yes".into()]).is_err());
        assert!(build_options(&["Yes".into(), "".into()]).is_err());
    }

    #[test]
    fn vote_increments_one_option() {
        let mut opts = options();
        let mut voted = Vec::new();
        cast_vote(&mut opts, &mut voted, 7, 1, day(20), day(12)).unwrap();
        assert_eq!(opts[1].votes, 1);
        assert_eq!(total_votes(&opts), 1);
        assert_eq!(voted, vec![7]);
    }

    #[test]
    fn second_vote_rejected() {
        let mut opts = options();
        let mut voted = vec![7];
        let err = cast_vote(&mut opts, &mut voted, 7, 0, day(20), day(12)).unwrap_err();
        assert_matches!(err, CoreError::Validation(msg) if msg == "Already voted");
        assert_eq!(total_votes(&opts), 0);
    }

    #[test]
    fn invalid_index_rejected() {
        let mut opts = options();
        let mut voted = Vec::new();
        for index in [-1, 3] {
            let err = cast_vote(&mut opts, &mut voted, 7, index, day(20), day(12)).unwrap_err();
            assert_matches!(err, CoreError::Validation(msg) if msg == "Invalid option");
        }
        assert!(voted.is_empty());
    }

    #[test]
    fn vote_on_closing_day_allowed_but_not_after() {
        let mut opts = options();
        let mut voted = Vec::new();
        assert!(cast_vote(&mut opts, &mut voted, 1, 0, day(20), day(20)).is_ok());
        assert!(cast_vote(&mut opts, &mut voted, 2, 0, day(20), day(21)).is_err());
    }
}
