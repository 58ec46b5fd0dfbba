use indexmap::IndexMap;
use thiserror::Error;

use crate::models::Activity;
use crate::store::SharedDirectory;

/// The Display strings double as the `detail` field of the JSON error body.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ActivitiesError {
    #[error("Activity not found")]
    NotFound,
    #[error("Student is already signed up")]
    AlreadySignedUp,
    #[error("Student is not registered for this activity")]
    NotRegistered,
}

pub fn list_activities(directory: &SharedDirectory) -> IndexMap<String, Activity> {
    let directory = directory.read().expect("activity directory lock poisoned");
    directory.all().clone()
}

/// Appends `email` to the activity's roster, preserving signup order.
/// Capacity is advisory only and never checked here.
pub fn sign_up(
    directory: &SharedDirectory,
    activity_name: &str,
    email: &str,
) -> Result<String, ActivitiesError> {
    let mut directory = directory.write().expect("activity directory lock poisoned");
    let activity = directory
        .get_mut(activity_name)
        .ok_or(ActivitiesError::NotFound)?;

    if activity.participants.iter().any(|p| p == email) {
        return Err(ActivitiesError::AlreadySignedUp);
    }

    activity.participants.push(email.to_string());
    Ok(format!("{} signed up for {}", email, activity_name))
}

pub fn unregister(
    directory: &SharedDirectory,
    activity_name: &str,
    email: &str,
) -> Result<String, ActivitiesError> {
    let mut directory = directory.write().expect("activity directory lock poisoned");
    let activity = directory
        .get_mut(activity_name)
        .ok_or(ActivitiesError::NotFound)?;

    let Some(position) = activity.participants.iter().position(|p| p == email) else {
        return Err(ActivitiesError::NotRegistered);
    };

    activity.participants.remove(position);
    Ok(format!("{} unregistered from {}", email, activity_name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::ActivityDirectory;

    fn directory() -> SharedDirectory {
        ActivityDirectory::seeded().into_shared()
    }

    fn roster(directory: &SharedDirectory, name: &str) -> Vec<String> {
        directory
            .read()
            .unwrap()
            .get(name)
            .unwrap()
            .participants
            .clone()
    }

    #[test]
    fn sign_up_appends_in_arrival_order() {
        let directory = directory();
        sign_up(&directory, "Basketball", "x@y.edu").unwrap();
        sign_up(&directory, "Basketball", "z@y.edu").unwrap();
        assert_eq!(
            roster(&directory, "Basketball"),
            vec!["james@mergington.edu", "x@y.edu", "z@y.edu"]
        );
    }

    #[test]
    fn duplicate_sign_up_is_rejected_without_mutation() {
        let directory = directory();
        let err = sign_up(&directory, "Basketball", "james@mergington.edu").unwrap_err();
        assert_eq!(err, ActivitiesError::AlreadySignedUp);
        assert_eq!(roster(&directory, "Basketball").len(), 1);
    }

    #[test]
    fn sign_up_for_unknown_activity_is_rejected() {
        let directory = directory();
        let err = sign_up(&directory, "Underwater Hockey", "x@y.edu").unwrap_err();
        assert_eq!(err, ActivitiesError::NotFound);
    }

    #[test]
    fn unregister_removes_only_the_given_email() {
        let directory = directory();
        unregister(&directory, "Drama Club", "alex@mergington.edu").unwrap();
        assert_eq!(roster(&directory, "Drama Club"), vec!["mia@mergington.edu"]);
    }

    #[test]
    fn unregister_of_absent_email_is_rejected_without_mutation() {
        let directory = directory();
        let err = unregister(&directory, "Basketball", "nobody@mergington.edu").unwrap_err();
        assert_eq!(err, ActivitiesError::NotRegistered);
        assert_eq!(roster(&directory, "Basketball").len(), 1);
    }

    #[test]
    fn unregister_for_unknown_activity_is_rejected() {
        let directory = directory();
        let err = unregister(&directory, "Underwater Hockey", "x@y.edu").unwrap_err();
        assert_eq!(err, ActivitiesError::NotFound);
    }

    #[test]
    fn rosters_of_different_activities_are_independent() {
        let directory = directory();
        sign_up(&directory, "Basketball", "multi@mergington.edu").unwrap();
        sign_up(&directory, "Tennis Club", "multi@mergington.edu").unwrap();
        assert!(roster(&directory, "Basketball").contains(&"multi@mergington.edu".to_string()));
        assert!(roster(&directory, "Tennis Club").contains(&"multi@mergington.edu".to_string()));
        assert_eq!(roster(&directory, "Chess Club").len(), 2);
    }
}
