//! Authorization checks.
//!
//! SkillQuest has no role lattice: authority is structural. The platform
//! owner is set at init, an instructor is whoever created a course, and a
//! registered user is anyone with a user record. Entry points authenticate
//! the caller with `require_auth` and then consult these checks.

use soroban_sdk::{Address, Env};

use crate::types::Course;
use crate::{storage, Error};

/// Require that `caller` is the platform owner.
pub fn require_owner(env: &Env, caller: &Address) -> Result<(), Error> {
    if storage::owner(env)? != *caller {
        return Err(Error::NotAuthorized);
    }
    Ok(())
}

/// Require that `caller` has a user record.
pub fn require_registered(env: &Env, caller: &Address) -> Result<(), Error> {
    if !storage::user_exists(env, caller) {
        return Err(Error::NotRegistered);
    }
    Ok(())
}

/// Require that `caller` is the instructor of `course`.
pub fn require_instructor(course: &Course, caller: &Address) -> Result<(), Error> {
    if course.instructor != *caller {
        return Err(Error::NotAuthorized);
    }
    Ok(())
}

/// Require that `caller` may revoke a certificate for `course`: either the
/// course's instructor or the platform owner.
pub fn require_instructor_or_owner(
    env: &Env,
    course: &Course,
    caller: &Address,
) -> Result<(), Error> {
    if course.instructor == *caller || storage::owner(env)? == *caller {
        return Ok(());
    }
    Err(Error::NotAuthorized)
}
