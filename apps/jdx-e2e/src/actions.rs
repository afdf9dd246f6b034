//! Match table → user actions.
//!
//! Rule applied to each entry in table order, with a counter that starts at 0
//! and is bumped before each entry (the first entry sees 1):
//! 1. No matches → replace with the entry's full substatement text.
//! 2. Counter even → reject.
//! 3. Counter odd → accept the first match.

use crate::models::match_table::{Accept, MatchTableEntry, MatchTableSelection, Replace};

#[derive(Debug, Clone, PartialEq)]
pub enum UserAction {
    Accept { recommendation_id: String },
    Reject,
    Replace { substatement: String },
}

/// A decision bound to the substatement it applies to.
#[derive(Debug, Clone, PartialEq)]
pub struct SubstatementAction {
    pub substatement_id: String,
    pub action: UserAction,
}

pub fn convert_match_table_to_user_actions(table: &[MatchTableEntry]) -> Vec<SubstatementAction> {
    let mut counter: u32 = 0;

    table
        .iter()
        .map(|entry| {
            counter += 1;

            let action = match entry.matches.first() {
                None => UserAction::Replace {
                    substatement: entry.substatement.clone(),
                },
                Some(_) if counter % 2 == 0 => UserAction::Reject,
                Some(first) => UserAction::Accept {
                    recommendation_id: first.recommendation_id.clone(),
                },
            };

            SubstatementAction {
                substatement_id: entry.substatement_id.clone(),
                action,
            }
        })
        .collect()
}

impl From<SubstatementAction> for MatchTableSelection {
    fn from(sa: SubstatementAction) -> Self {
        let (accept, replace) = match sa.action {
            UserAction::Accept { recommendation_id } => (Some(Accept { recommendation_id }), None),
            UserAction::Reject => (None, None),
            UserAction::Replace { substatement } => (None, Some(Replace { substatement })),
        };
        MatchTableSelection {
            substatement_id: sa.substatement_id,
            accept,
            replace,
        }
    }
}
