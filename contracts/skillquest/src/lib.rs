//! # SkillQuest Platform Contract
//!
//! Root crate of the SkillQuest decentralized learning platform. It exposes
//! the single Soroban contract [`SkillQuest`] whose entry points cover the
//! full course lifecycle:
//!
//! | Phase         | Entry Point(s)                                        |
//! |---------------|-------------------------------------------------------|
//! | Bootstrap     | [`SkillQuest::init`]                                  |
//! | Registration  | [`SkillQuest::register`]                              |
//! | Authoring     | `create_course`, `update_course`, `update_course_rewards`, `pause_course` |
//! | Learning      | `enroll`, `batch_enroll`, `update_progress`           |
//! | Certification | issued on completion, `revoke_certificate`            |
//! | Admin         | `pause`, `unpause`, `withdraw_platform_fees`, `top_up_reward_pool`, `emergency_withdraw`, `set_token_contract`, `transfer_ownership` |
//! | Queries       | `get_user`, `get_course`, `get_enrollment`, `get_certificate`, totals, tags |
//!
//! ## Architecture
//!
//! Authorization checks live in [`access`]. Storage access is fully
//! delegated to [`storage`]. Token balances are only ever moved through the
//! standard token interface (`token::Client`); the platform's own balance
//! doubles as the reward pool, with withdrawable fees tracked separately in
//! an explicit accumulator. Each invocation is one atomic ledger
//! transaction: an `Err` from any entry point rolls back every state
//! mutation, token transfers included.

#![no_std]
#![allow(clippy::too_many_arguments)]

use soroban_sdk::{
    contract, contracterror, contractimpl, token, Address, Env, String, Vec,
};

pub mod access;
pub mod events;
mod storage;
mod types;

#[cfg(test)]
mod test_admin;
#[cfg(test)]
mod test_events;
#[cfg(test)]
mod invariants;

pub use types::{
    certificate_uri, Certificate, Course, Enrollment, User, PLATFORM_FEE_PERCENT,
    PROGRESS_COMPLETE, TOKEN_UNIT, WELCOME_BONUS,
};

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    NotRegistered = 3,
    AlreadyRegistered = 4,
    NotAuthorized = 5,
    PlatformPaused = 6,
    CourseNotFound = 7,
    CourseUnavailable = 8,
    CoursePaused = 9,
    AlreadyEnrolled = 10,
    NotEnrolled = 11,
    PrerequisitesNotMet = 12,
    InvalidProgress = 13,
    ProgressCannotDecrease = 14,
    MinimumDurationNotMet = 15,
    CertificateNotFound = 16,
    InsufficientFees = 17,
    InvalidAmount = 18,
    Overflow = 19,
}

#[contract]
pub struct SkillQuest;

#[contractimpl]
impl SkillQuest {
    // ───────────────────────────────────────────────────────────────
    // Bootstrap
    // ───────────────────────────────────────────────────────────────

    /// Initialise the platform with its owner and payment token.
    ///
    /// Must be called exactly once after deployment; subsequent calls fail
    /// with `AlreadyInitialized`.
    ///
    /// - `owner` must sign the transaction and becomes the only identity
    ///   allowed to run the admin operations.
    /// - `token` is the contract whose balances back payments, fees and the
    ///   reward pool.
    pub fn init(env: Env, owner: Address, token: Address) -> Result<(), Error> {
        owner.require_auth();
        if storage::is_initialized(&env) {
            return Err(Error::AlreadyInitialized);
        }
        storage::set_owner(&env, &owner);
        storage::set_token_contract(&env, &token);
        storage::set_paused(&env, false);
        storage::extend_instance_ttl(&env);
        Ok(())
    }

    // ───────────────────────────────────────────────────────────────
    // User registry
    // ───────────────────────────────────────────────────────────────

    /// Register `user` on the platform.
    ///
    /// An identity registers at most once; a second call fails with
    /// `AlreadyRegistered`. Registration pays a 10-token welcome bonus from
    /// the reward pool; an underfunded pool aborts the whole call.
    pub fn register(env: Env, user: Address) -> Result<User, Error> {
        Self::require_not_paused(&env)?;
        user.require_auth();

        if storage::user_exists(&env, &user) {
            return Err(Error::AlreadyRegistered);
        }

        let id = storage::next_user_id(&env);
        let record = User {
            id,
            registered_at: env.ledger().timestamp(),
            xp: 0,
            enrolled_courses: Vec::new(&env),
            completed_courses: Vec::new(&env),
            certificates: Vec::new(&env),
        };
        storage::save_user(&env, &user, &record);

        let token = token::Client::new(&env, &storage::token_contract(&env)?);
        token.transfer(&env.current_contract_address(), &user, &WELCOME_BONUS);

        events::emit_user_registered(&env, user, id, WELCOME_BONUS);
        Ok(record)
    }

    pub fn get_user(env: Env, user: Address) -> Result<User, Error> {
        storage::load_user(&env, &user)
    }

    pub fn is_registered(env: Env, user: Address) -> bool {
        storage::user_exists(&env, &user)
    }

    pub fn total_users(env: Env) -> u64 {
        storage::total_users(&env)
    }

    // ───────────────────────────────────────────────────────────────
    // Course registry
    // ───────────────────────────────────────────────────────────────

    /// Create a new course and return its id.
    ///
    /// - `instructor` must be a registered user.
    /// - Every id in `prerequisites` must name an existing course.
    /// - `tags` are merged into the global tag registry, skipping
    ///   duplicates.
    pub fn create_course(
        env: Env,
        instructor: Address,
        metadata_uri: String,
        title: String,
        description: String,
        price: i128,
        duration: u64,
        xp_reward: u32,
        token_reward: i128,
        prerequisites: Vec<u64>,
        tags: Vec<String>,
    ) -> Result<u64, Error> {
        Self::require_not_paused(&env)?;
        instructor.require_auth();
        access::require_registered(&env, &instructor)?;

        if price < 0 || token_reward < 0 {
            return Err(Error::InvalidAmount);
        }
        for prereq in prerequisites.iter() {
            if !storage::course_exists(&env, prereq) {
                return Err(Error::CourseNotFound);
            }
        }

        let id = storage::next_course_id(&env);
        let course = Course {
            id,
            instructor: instructor.clone(),
            metadata_uri,
            title,
            description,
            price,
            duration,
            xp_reward,
            token_reward,
            prerequisites,
            tags: tags.clone(),
            is_active: true,
            is_paused: false,
            enrollment_count: 0,
            completion_count: 0,
            created_at: env.ledger().timestamp(),
        };
        storage::save_course(&env, &course);
        storage::push_instructor_course(&env, &instructor, id);
        storage::merge_tags(&env, &tags);

        events::emit_course_created(&env, id, instructor, price);
        Ok(id)
    }

    /// Update a course's descriptive fields, price and active flag.
    ///
    /// - `instructor` must be the course's instructor.
    pub fn update_course(
        env: Env,
        instructor: Address,
        course_id: u64,
        metadata_uri: String,
        title: String,
        description: String,
        price: i128,
        is_active: bool,
    ) -> Result<(), Error> {
        Self::require_not_paused(&env)?;
        instructor.require_auth();

        let mut course = storage::load_course(&env, course_id)?;
        access::require_instructor(&course, &instructor)?;
        if price < 0 {
            return Err(Error::InvalidAmount);
        }

        course.metadata_uri = metadata_uri;
        course.title = title;
        course.description = description;
        course.price = price;
        course.is_active = is_active;
        storage::save_course(&env, &course);

        events::emit_course_updated(&env, course_id, is_active);
        Ok(())
    }

    /// Update only the reward fields of a course.
    pub fn update_course_rewards(
        env: Env,
        instructor: Address,
        course_id: u64,
        xp_reward: u32,
        token_reward: i128,
    ) -> Result<(), Error> {
        Self::require_not_paused(&env)?;
        instructor.require_auth();

        let mut course = storage::load_course(&env, course_id)?;
        access::require_instructor(&course, &instructor)?;
        if token_reward < 0 {
            return Err(Error::InvalidAmount);
        }

        course.xp_reward = xp_reward;
        course.token_reward = token_reward;
        storage::save_course(&env, &course);
        Ok(())
    }

    /// Pause or unpause enrollments for a course.
    ///
    /// Existing enrollments and their progress are untouched.
    pub fn pause_course(
        env: Env,
        instructor: Address,
        course_id: u64,
        paused: bool,
    ) -> Result<(), Error> {
        Self::require_not_paused(&env)?;
        instructor.require_auth();

        let mut course = storage::load_course(&env, course_id)?;
        access::require_instructor(&course, &instructor)?;

        course.is_paused = paused;
        storage::save_course(&env, &course);

        events::emit_course_pause_set(&env, course_id, paused);
        Ok(())
    }

    pub fn get_course(env: Env, course_id: u64) -> Result<Course, Error> {
        storage::load_course(&env, course_id)
    }

    pub fn get_courses_by_instructor(env: Env, instructor: Address) -> Vec<u64> {
        storage::instructor_courses(&env, &instructor)
    }

    pub fn get_all_tags(env: Env) -> Vec<String> {
        storage::all_tags(&env)
    }

    pub fn total_courses(env: Env) -> u64 {
        storage::total_courses(&env)
    }

    // ───────────────────────────────────────────────────────────────
    // Enrollment & progress
    // ───────────────────────────────────────────────────────────────

    /// Enroll `student` in `course_id`.
    ///
    /// The student pays the course price: 5% is retained as a platform fee
    /// and the remainder goes to the instructor immediately. Requires the
    /// student to be registered, the course active and unpaused, no prior
    /// enrollment, and every prerequisite present in the student's
    /// completed set.
    pub fn enroll(env: Env, student: Address, course_id: u64) -> Result<(), Error> {
        Self::require_not_paused(&env)?;
        student.require_auth();
        Self::enroll_one(&env, &student, course_id)
    }

    /// Enroll `student` in every course in `course_ids`, atomically.
    ///
    /// The ids are processed in order; the first failure aborts the whole
    /// batch, leaving no enrollment (or payment) behind.
    pub fn batch_enroll(env: Env, student: Address, course_ids: Vec<u64>) -> Result<(), Error> {
        Self::require_not_paused(&env)?;
        student.require_auth();
        for course_id in course_ids.iter() {
            Self::enroll_one(&env, &student, course_id)?;
        }
        Ok(())
    }

    /// Record `student`'s progress in `course_id`.
    ///
    /// Progress is a percentage and never decreases. The first time it
    /// reaches 100 (and only after the course's minimum duration has
    /// elapsed since enrollment) the completion transition fires once:
    /// XP and token rewards are granted and a certificate is issued.
    /// Re-submitting 100 afterwards is a no-op success.
    pub fn update_progress(
        env: Env,
        student: Address,
        course_id: u64,
        new_progress: u32,
    ) -> Result<(), Error> {
        Self::require_not_paused(&env)?;
        student.require_auth();

        let mut enrollment = storage::load_enrollment(&env, course_id, &student)?;
        if new_progress > PROGRESS_COMPLETE {
            return Err(Error::InvalidProgress);
        }
        if new_progress < enrollment.progress {
            return Err(Error::ProgressCannotDecrease);
        }

        let newly_completed =
            new_progress == PROGRESS_COMPLETE && enrollment.progress < PROGRESS_COMPLETE;
        if newly_completed {
            let course = storage::load_course(&env, course_id)?;
            let elapsed = env.ledger().timestamp() - enrollment.enrolled_at;
            if elapsed < course.duration {
                return Err(Error::MinimumDurationNotMet);
            }
        }

        enrollment.progress = new_progress;
        storage::save_enrollment(&env, course_id, &student, &enrollment);
        events::emit_progress_updated(&env, course_id, student.clone(), new_progress);

        if newly_completed {
            Self::complete_course(&env, &student, course_id)?;
        }
        Ok(())
    }

    pub fn get_enrollment(env: Env, course_id: u64, student: Address) -> Result<Enrollment, Error> {
        storage::load_enrollment(&env, course_id, &student)
    }

    pub fn is_enrolled(env: Env, course_id: u64, student: Address) -> bool {
        storage::enrollment_exists(&env, course_id, &student)
    }

    // ───────────────────────────────────────────────────────────────
    // Certificates
    // ───────────────────────────────────────────────────────────────

    /// Revoke a certificate.
    ///
    /// - `caller` must be the platform owner or the instructor of the
    ///   certificate's course.
    /// - Revocation is permanent; there is no un-revoke.
    pub fn revoke_certificate(env: Env, caller: Address, certificate_id: u64) -> Result<(), Error> {
        Self::require_not_paused(&env)?;
        caller.require_auth();

        let mut certificate = storage::load_certificate(&env, certificate_id)?;
        let course = storage::load_course(&env, certificate.course_id)?;
        access::require_instructor_or_owner(&env, &course, &caller)?;

        certificate.is_revoked = true;
        storage::save_certificate(&env, &certificate);

        events::emit_certificate_revoked(&env, certificate_id, caller);
        Ok(())
    }

    pub fn get_certificate(env: Env, certificate_id: u64) -> Result<Certificate, Error> {
        storage::load_certificate(&env, certificate_id)
    }

    pub fn total_certificates(env: Env) -> u64 {
        storage::total_certificates(&env)
    }

    // ───────────────────────────────────────────────────────────────
    // Admin
    // ───────────────────────────────────────────────────────────────

    /// Repoint the platform at a different token contract. Owner-only;
    /// intended for migration scenarios.
    pub fn set_token_contract(env: Env, owner: Address, token: Address) -> Result<(), Error> {
        owner.require_auth();
        access::require_owner(&env, &owner)?;
        storage::set_token_contract(&env, &token);
        Ok(())
    }

    /// Withdraw `amount` from the accumulated platform fees to the owner.
    ///
    /// Fails with `InsufficientFees` if `amount` exceeds the fee
    /// accumulator; the reward pool held in the same balance is never
    /// touched by this operation.
    pub fn withdraw_platform_fees(env: Env, owner: Address, amount: i128) -> Result<(), Error> {
        owner.require_auth();
        access::require_owner(&env, &owner)?;
        if amount <= 0 {
            return Err(Error::InvalidAmount);
        }
        storage::deduct_collected_fees(&env, amount)?;

        let token = token::Client::new(&env, &storage::token_contract(&env)?);
        token.transfer(&env.current_contract_address(), &owner, &amount);

        events::emit_fees_withdrawn(&env, owner, amount);
        Ok(())
    }

    /// Transfer `amount` tokens from `from` into the reward pool.
    pub fn top_up_reward_pool(env: Env, from: Address, amount: i128) -> Result<(), Error> {
        Self::require_not_paused(&env)?;
        from.require_auth();
        if amount <= 0 {
            return Err(Error::InvalidAmount);
        }

        let token = token::Client::new(&env, &storage::token_contract(&env)?);
        token.transfer(&from, &env.current_contract_address(), &amount);

        events::emit_reward_pool_topped_up(&env, from, amount);
        Ok(())
    }

    /// Pause the platform, halting registrations, course authoring,
    /// enrollments and progress updates. Queries stay available.
    pub fn pause(env: Env, owner: Address) -> Result<(), Error> {
        owner.require_auth();
        access::require_owner(&env, &owner)?;
        storage::set_paused(&env, true);
        events::emit_platform_paused(&env, owner);
        Ok(())
    }

    /// Unpause the platform.
    pub fn unpause(env: Env, owner: Address) -> Result<(), Error> {
        owner.require_auth();
        access::require_owner(&env, &owner)?;
        storage::set_paused(&env, false);
        events::emit_platform_unpaused(&env, owner);
        Ok(())
    }

    pub fn is_paused(env: Env) -> bool {
        storage::is_paused(&env)
    }

    /// Drain the platform's entire token balance to `to`.
    ///
    /// Last-resort escape hatch: ignores the fee/reward-pool split and
    /// zeroes the fee accumulator along the way.
    pub fn emergency_withdraw(env: Env, owner: Address, to: Address) -> Result<(), Error> {
        owner.require_auth();
        access::require_owner(&env, &owner)?;

        let token = token::Client::new(&env, &storage::token_contract(&env)?);
        let balance = token.balance(&env.current_contract_address());
        if balance > 0 {
            token.transfer(&env.current_contract_address(), &to, &balance);
        }
        storage::clear_collected_fees(&env);

        events::emit_emergency_withdrawal(&env, to, balance);
        Ok(())
    }

    /// Hand the platform over to `new_owner`. The previous owner loses all
    /// admin authority immediately.
    pub fn transfer_ownership(env: Env, owner: Address, new_owner: Address) -> Result<(), Error> {
        owner.require_auth();
        access::require_owner(&env, &owner)?;
        storage::set_owner(&env, &new_owner);
        events::emit_ownership_transferred(&env, owner, new_owner);
        Ok(())
    }

    pub fn owner(env: Env) -> Result<Address, Error> {
        storage::owner(&env)
    }

    pub fn token_contract(env: Env) -> Result<Address, Error> {
        storage::token_contract(&env)
    }

    pub fn collected_fees(env: Env) -> i128 {
        storage::collected_fees(&env)
    }

    // ───────────────────────────────────────────────────────────────
    // Internal helpers
    // ───────────────────────────────────────────────────────────────

    fn require_not_paused(env: &Env) -> Result<(), Error> {
        if storage::is_paused(env) {
            return Err(Error::PlatformPaused);
        }
        Ok(())
    }

    /// Split `price` into the retained platform fee and the instructor's
    /// share. The two always sum exactly to `price`.
    fn split_fee(price: i128) -> Result<(i128, i128), Error> {
        let fee = price
            .checked_mul(PLATFORM_FEE_PERCENT)
            .ok_or(Error::Overflow)?
            / 100;
        Ok((fee, price - fee))
    }

    fn enroll_one(env: &Env, student: &Address, course_id: u64) -> Result<(), Error> {
        let mut user = storage::load_user(env, student)?;
        let mut course = storage::load_course(env, course_id)?;
        if !course.is_active {
            return Err(Error::CourseUnavailable);
        }
        if course.is_paused {
            return Err(Error::CoursePaused);
        }
        if storage::enrollment_exists(env, course_id, student) {
            return Err(Error::AlreadyEnrolled);
        }
        for prereq in course.prerequisites.iter() {
            if !user.completed_courses.contains(&prereq) {
                return Err(Error::PrerequisitesNotMet);
            }
        }

        let (fee, instructor_payment) = Self::split_fee(course.price)?;
        if course.price > 0 {
            let token = token::Client::new(env, &storage::token_contract(env)?);
            token.transfer(student, &env.current_contract_address(), &course.price);
            token.transfer(
                &env.current_contract_address(),
                &course.instructor,
                &instructor_payment,
            );
            storage::add_collected_fees(env, fee)?;
        }

        storage::save_enrollment(
            env,
            course_id,
            student,
            &Enrollment {
                progress: 0,
                enrolled_at: env.ledger().timestamp(),
            },
        );

        course.enrollment_count = course
            .enrollment_count
            .checked_add(1)
            .ok_or(Error::Overflow)?;
        storage::save_course(env, &course);

        user.enrolled_courses.push_back(course_id);
        storage::save_user(env, student, &user);

        events::emit_student_enrolled(
            env,
            course_id,
            student.clone(),
            course.price,
            fee,
            instructor_payment,
        );
        Ok(())
    }

    /// One-time completion transition: rewards, counters, certificate.
    ///
    /// Callers guarantee this runs at most once per (course, student):
    /// progress cannot decrease, so the 100 threshold is crossed once.
    fn complete_course(env: &Env, student: &Address, course_id: u64) -> Result<(), Error> {
        let mut user = storage::load_user(env, student)?;
        let mut course = storage::load_course(env, course_id)?;

        user.completed_courses.push_back(course_id);
        user.xp = user.xp.checked_add(course.xp_reward).ok_or(Error::Overflow)?;

        course.completion_count = course
            .completion_count
            .checked_add(1)
            .ok_or(Error::Overflow)?;
        storage::save_course(env, &course);

        if course.token_reward > 0 {
            let token = token::Client::new(env, &storage::token_contract(env)?);
            token.transfer(&env.current_contract_address(), student, &course.token_reward);
        }

        let certificate_id = storage::next_certificate_id(env);
        let certificate = Certificate {
            id: certificate_id,
            course_id,
            recipient: student.clone(),
            issued_at: env.ledger().timestamp(),
            expires_at: 0,
            is_revoked: false,
            metadata_uri: certificate_uri(env, certificate_id),
        };
        storage::save_certificate(env, &certificate);

        user.certificates.push_back(certificate_id);
        storage::save_user(env, student, &user);

        events::emit_certificate_issued(env, certificate_id, course_id, student.clone());
        events::emit_course_completed(
            env,
            course_id,
            student.clone(),
            course.xp_reward,
            course.token_reward,
            certificate_id,
        );
        Ok(())
    }
}
