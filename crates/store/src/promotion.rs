//! The group-promotion batch algorithm.
//!
//! At the end of a period every member's leveled group advances by one;
//! members already at [`MAX_GROUP_LEVEL`] graduate out and are deleted with
//! the full cascade, freeing their id. Members of the administrator group
//! and members with free-form group names are left untouched.

use serde::Serialize;

use canteen_core::{GroupName, MAX_GROUP_LEVEL, UserId, UserPatch};

use crate::store::Store;

/// One distinct group rename observed during a promotion run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupTransition {
    pub from: String,
    pub to: String,
}

/// Result of a promotion run.
///
/// `transitions` lists distinct (from, to) group pairs for reporting; it
/// carries no per-user detail.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PromotionOutcome {
    /// Members whose group advanced one level.
    pub promoted: usize,
    /// Members at the ceiling who were deleted.
    pub deleted: usize,
    /// Deduplicated group renames.
    pub transitions: Vec<GroupTransition>,
}

impl Store {
    /// Advance every non-admin member's leveled group by one, deleting
    /// members at the ceiling.
    ///
    /// A one-shot batch transform: repeated calls keep advancing (and
    /// eventually deleting) - there is no guard against double invocation,
    /// so callers sequence it themselves.
    pub fn promote_members(&mut self) -> PromotionOutcome {
        let members: Vec<(UserId, GroupName)> = self
            .users()
            .into_iter()
            .filter(|user| !user.group_name.is_admin())
            .map(|user| (user.id, user.group_name))
            .collect();

        let mut outcome = PromotionOutcome::default();

        for (member_id, group_name) in members {
            // Free-form group names are exempt.
            let Some((_, level)) = group_name.split_leveled() else {
                continue;
            };

            if level >= MAX_GROUP_LEVEL {
                self.delete_user(member_id);
                outcome.deleted += 1;
                tracing::info!("graduated member {member_id} out of {group_name}");
            } else if let Some(next) = group_name.promoted() {
                let transition = GroupTransition {
                    from: group_name.as_str().to_owned(),
                    to: next.as_str().to_owned(),
                };
                self.update_user(
                    member_id,
                    UserPatch {
                        group_name: Some(next),
                        ..UserPatch::default()
                    },
                );
                outcome.promoted += 1;
                if !outcome.transitions.contains(&transition) {
                    outcome.transitions.push(transition);
                }
            }
        }

        self.persist();
        outcome
    }
}
