//! All persistent-state access for the platform contract.
//!
//! Entry points never touch `env.storage()` directly; every read and write
//! goes through the typed helpers here, which also bump entry TTLs so that
//! actively used records do not expire out from under their owners.

use soroban_sdk::{Address, Env, String, Vec};

use crate::types::{Certificate, Course, DataKey, Enrollment, User};
use crate::Error;

/// Extend a persistent entry once its remaining TTL drops below the
/// threshold. Values are ledgers (~5s each): ~30 days / ~150 days.
const PERSISTENT_TTL_THRESHOLD: u32 = 518_400;
const PERSISTENT_TTL_EXTEND: u32 = 2_592_000;

const INSTANCE_TTL_THRESHOLD: u32 = 518_400;
const INSTANCE_TTL_EXTEND: u32 = 2_592_000;

pub fn extend_instance_ttl(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_TTL_THRESHOLD, INSTANCE_TTL_EXTEND);
}

fn extend_entry_ttl(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_EXTEND);
}

// ───────────────────────────────────────────────────────────────────
// Platform configuration
// ───────────────────────────────────────────────────────────────────

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Owner)
}

pub fn set_owner(env: &Env, owner: &Address) {
    env.storage().instance().set(&DataKey::Owner, owner);
}

pub fn owner(env: &Env) -> Result<Address, Error> {
    env.storage()
        .instance()
        .get(&DataKey::Owner)
        .ok_or(Error::NotInitialized)
}

pub fn set_token_contract(env: &Env, token: &Address) {
    env.storage().instance().set(&DataKey::TokenContract, token);
}

pub fn token_contract(env: &Env) -> Result<Address, Error> {
    env.storage()
        .instance()
        .get(&DataKey::TokenContract)
        .ok_or(Error::NotInitialized)
}

pub fn set_paused(env: &Env, paused: bool) {
    env.storage().instance().set(&DataKey::Paused, &paused);
}

pub fn is_paused(env: &Env) -> bool {
    env.storage()
        .instance()
        .get(&DataKey::Paused)
        .unwrap_or(false)
}

// ───────────────────────────────────────────────────────────────────
// Platform fee accumulator
// ───────────────────────────────────────────────────────────────────

pub fn collected_fees(env: &Env) -> i128 {
    env.storage()
        .instance()
        .get(&DataKey::CollectedFees)
        .unwrap_or(0)
}

pub fn add_collected_fees(env: &Env, amount: i128) -> Result<(), Error> {
    let total = collected_fees(env)
        .checked_add(amount)
        .ok_or(Error::Overflow)?;
    env.storage().instance().set(&DataKey::CollectedFees, &total);
    Ok(())
}

/// Deduct `amount` from the accumulator; the caller performs the transfer.
pub fn deduct_collected_fees(env: &Env, amount: i128) -> Result<(), Error> {
    let current = collected_fees(env);
    if amount > current {
        return Err(Error::InsufficientFees);
    }
    env.storage()
        .instance()
        .set(&DataKey::CollectedFees, &(current - amount));
    Ok(())
}

pub fn clear_collected_fees(env: &Env) {
    env.storage().instance().set(&DataKey::CollectedFees, &0i128);
}

// ───────────────────────────────────────────────────────────────────
// Sequential id counters
// ───────────────────────────────────────────────────────────────────

fn next_id(env: &Env, key: DataKey) -> u64 {
    let id: u64 = env.storage().instance().get(&key).unwrap_or(0) + 1;
    env.storage().instance().set(&key, &id);
    id
}

pub fn next_user_id(env: &Env) -> u64 {
    next_id(env, DataKey::UserCount)
}

pub fn next_course_id(env: &Env) -> u64 {
    next_id(env, DataKey::CourseCount)
}

pub fn next_certificate_id(env: &Env) -> u64 {
    next_id(env, DataKey::CertificateCount)
}

pub fn total_users(env: &Env) -> u64 {
    env.storage().instance().get(&DataKey::UserCount).unwrap_or(0)
}

pub fn total_courses(env: &Env) -> u64 {
    env.storage().instance().get(&DataKey::CourseCount).unwrap_or(0)
}

pub fn total_certificates(env: &Env) -> u64 {
    env.storage()
        .instance()
        .get(&DataKey::CertificateCount)
        .unwrap_or(0)
}

// ───────────────────────────────────────────────────────────────────
// Users
// ───────────────────────────────────────────────────────────────────

pub fn user_exists(env: &Env, address: &Address) -> bool {
    env.storage()
        .persistent()
        .has(&DataKey::User(address.clone()))
}

pub fn maybe_load_user(env: &Env, address: &Address) -> Option<User> {
    let key = DataKey::User(address.clone());
    let user: Option<User> = env.storage().persistent().get(&key);
    if user.is_some() {
        extend_entry_ttl(env, &key);
    }
    user
}

pub fn load_user(env: &Env, address: &Address) -> Result<User, Error> {
    maybe_load_user(env, address).ok_or(Error::NotRegistered)
}

pub fn save_user(env: &Env, address: &Address, user: &User) {
    let key = DataKey::User(address.clone());
    env.storage().persistent().set(&key, user);
    extend_entry_ttl(env, &key);
}

// ───────────────────────────────────────────────────────────────────
// Courses
// ───────────────────────────────────────────────────────────────────

pub fn course_exists(env: &Env, course_id: u64) -> bool {
    env.storage().persistent().has(&DataKey::Course(course_id))
}

pub fn maybe_load_course(env: &Env, course_id: u64) -> Option<Course> {
    let key = DataKey::Course(course_id);
    let course: Option<Course> = env.storage().persistent().get(&key);
    if course.is_some() {
        extend_entry_ttl(env, &key);
    }
    course
}

pub fn load_course(env: &Env, course_id: u64) -> Result<Course, Error> {
    maybe_load_course(env, course_id).ok_or(Error::CourseNotFound)
}

pub fn save_course(env: &Env, course: &Course) {
    let key = DataKey::Course(course.id);
    env.storage().persistent().set(&key, course);
    extend_entry_ttl(env, &key);
}

/// Append `course_id` to `instructor`'s course index.
pub fn push_instructor_course(env: &Env, instructor: &Address, course_id: u64) {
    let key = DataKey::InstructorCourses(instructor.clone());
    let mut ids: Vec<u64> = env
        .storage()
        .persistent()
        .get(&key)
        .unwrap_or_else(|| Vec::new(env));
    ids.push_back(course_id);
    env.storage().persistent().set(&key, &ids);
    extend_entry_ttl(env, &key);
}

pub fn instructor_courses(env: &Env, instructor: &Address) -> Vec<u64> {
    env.storage()
        .persistent()
        .get(&DataKey::InstructorCourses(instructor.clone()))
        .unwrap_or_else(|| Vec::new(env))
}

// ───────────────────────────────────────────────────────────────────
// Enrollments
// ───────────────────────────────────────────────────────────────────

pub fn enrollment_exists(env: &Env, course_id: u64, student: &Address) -> bool {
    env.storage()
        .persistent()
        .has(&DataKey::Enrollment(course_id, student.clone()))
}

pub fn maybe_load_enrollment(env: &Env, course_id: u64, student: &Address) -> Option<Enrollment> {
    let key = DataKey::Enrollment(course_id, student.clone());
    let enrollment: Option<Enrollment> = env.storage().persistent().get(&key);
    if enrollment.is_some() {
        extend_entry_ttl(env, &key);
    }
    enrollment
}

pub fn load_enrollment(env: &Env, course_id: u64, student: &Address) -> Result<Enrollment, Error> {
    maybe_load_enrollment(env, course_id, student).ok_or(Error::NotEnrolled)
}

pub fn save_enrollment(env: &Env, course_id: u64, student: &Address, enrollment: &Enrollment) {
    let key = DataKey::Enrollment(course_id, student.clone());
    env.storage().persistent().set(&key, enrollment);
    extend_entry_ttl(env, &key);
}

// ───────────────────────────────────────────────────────────────────
// Certificates
// ───────────────────────────────────────────────────────────────────

pub fn maybe_load_certificate(env: &Env, certificate_id: u64) -> Option<Certificate> {
    let key = DataKey::Certificate(certificate_id);
    let certificate: Option<Certificate> = env.storage().persistent().get(&key);
    if certificate.is_some() {
        extend_entry_ttl(env, &key);
    }
    certificate
}

pub fn load_certificate(env: &Env, certificate_id: u64) -> Result<Certificate, Error> {
    maybe_load_certificate(env, certificate_id).ok_or(Error::CertificateNotFound)
}

pub fn save_certificate(env: &Env, certificate: &Certificate) {
    let key = DataKey::Certificate(certificate.id);
    env.storage().persistent().set(&key, certificate);
    extend_entry_ttl(env, &key);
}

// ───────────────────────────────────────────────────────────────────
// Tag registry
// ───────────────────────────────────────────────────────────────────

pub fn all_tags(env: &Env) -> Vec<String> {
    env.storage()
        .persistent()
        .get(&DataKey::Tags)
        .unwrap_or_else(|| Vec::new(env))
}

/// Merge `tags` into the global registry, skipping duplicates.
pub fn merge_tags(env: &Env, tags: &Vec<String>) {
    let mut registry = all_tags(env);
    let mut changed = false;
    for tag in tags.iter() {
        if !registry.contains(&tag) {
            registry.push_back(tag);
            changed = true;
        }
    }
    if changed {
        env.storage().persistent().set(&DataKey::Tags, &registry);
        extend_entry_ttl(env, &DataKey::Tags);
    }
}
