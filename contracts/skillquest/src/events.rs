use soroban_sdk::{contracttype, symbol_short, Address, Env};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UserRegistered {
    pub user: Address,
    pub user_id: u64,
    pub welcome_bonus: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CourseCreated {
    pub course_id: u64,
    pub instructor: Address,
    pub price: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CourseUpdated {
    pub course_id: u64,
    pub is_active: bool,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CoursePauseSet {
    pub course_id: u64,
    pub paused: bool,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StudentEnrolled {
    pub course_id: u64,
    pub student: Address,
    pub price: i128,
    pub platform_fee: i128,
    pub instructor_payment: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProgressUpdated {
    pub course_id: u64,
    pub student: Address,
    pub progress: u32,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CourseCompleted {
    pub course_id: u64,
    pub student: Address,
    pub xp_reward: u32,
    pub token_reward: i128,
    pub certificate_id: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CertificateIssued {
    pub certificate_id: u64,
    pub course_id: u64,
    pub recipient: Address,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CertificateRevoked {
    pub certificate_id: u64,
    pub revoked_by: Address,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FeesWithdrawn {
    pub to: Address,
    pub amount: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RewardPoolToppedUp {
    pub from: Address,
    pub amount: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EmergencyWithdrawal {
    pub to: Address,
    pub amount: i128,
}

pub fn emit_user_registered(env: &Env, user: Address, user_id: u64, welcome_bonus: i128) {
    let topics = (symbol_short!("register"), user.clone());
    let data = UserRegistered {
        user,
        user_id,
        welcome_bonus,
    };
    env.events().publish(topics, data);
}

pub fn emit_course_created(env: &Env, course_id: u64, instructor: Address, price: i128) {
    let topics = (symbol_short!("created"), course_id);
    let data = CourseCreated {
        course_id,
        instructor,
        price,
    };
    env.events().publish(topics, data);
}

pub fn emit_course_updated(env: &Env, course_id: u64, is_active: bool) {
    let topics = (symbol_short!("updated"), course_id);
    let data = CourseUpdated {
        course_id,
        is_active,
    };
    env.events().publish(topics, data);
}

pub fn emit_course_pause_set(env: &Env, course_id: u64, paused: bool) {
    let topics = (symbol_short!("crspause"), course_id);
    let data = CoursePauseSet { course_id, paused };
    env.events().publish(topics, data);
}

pub fn emit_student_enrolled(
    env: &Env,
    course_id: u64,
    student: Address,
    price: i128,
    platform_fee: i128,
    instructor_payment: i128,
) {
    let topics = (symbol_short!("enrolled"), course_id);
    let data = StudentEnrolled {
        course_id,
        student,
        price,
        platform_fee,
        instructor_payment,
    };
    env.events().publish(topics, data);
}

pub fn emit_progress_updated(env: &Env, course_id: u64, student: Address, progress: u32) {
    let topics = (symbol_short!("progress"), course_id);
    let data = ProgressUpdated {
        course_id,
        student,
        progress,
    };
    env.events().publish(topics, data);
}

pub fn emit_course_completed(
    env: &Env,
    course_id: u64,
    student: Address,
    xp_reward: u32,
    token_reward: i128,
    certificate_id: u64,
) {
    let topics = (symbol_short!("completed"), course_id);
    let data = CourseCompleted {
        course_id,
        student,
        xp_reward,
        token_reward,
        certificate_id,
    };
    env.events().publish(topics, data);
}

pub fn emit_certificate_issued(env: &Env, certificate_id: u64, course_id: u64, recipient: Address) {
    let topics = (symbol_short!("cert"), certificate_id);
    let data = CertificateIssued {
        certificate_id,
        course_id,
        recipient,
    };
    env.events().publish(topics, data);
}

pub fn emit_certificate_revoked(env: &Env, certificate_id: u64, revoked_by: Address) {
    let topics = (symbol_short!("revoked"), certificate_id);
    let data = CertificateRevoked {
        certificate_id,
        revoked_by,
    };
    env.events().publish(topics, data);
}

pub fn emit_fees_withdrawn(env: &Env, to: Address, amount: i128) {
    let topics = (symbol_short!("fees"), to.clone());
    let data = FeesWithdrawn { to, amount };
    env.events().publish(topics, data);
}

pub fn emit_reward_pool_topped_up(env: &Env, from: Address, amount: i128) {
    let topics = (symbol_short!("topup"), from.clone());
    let data = RewardPoolToppedUp { from, amount };
    env.events().publish(topics, data);
}

pub fn emit_emergency_withdrawal(env: &Env, to: Address, amount: i128) {
    let topics = (symbol_short!("drained"), to.clone());
    let data = EmergencyWithdrawal { to, amount };
    env.events().publish(topics, data);
}

pub fn emit_platform_paused(env: &Env, owner: Address) {
    env.events().publish((symbol_short!("paused"), owner), ());
}

pub fn emit_platform_unpaused(env: &Env, owner: Address) {
    env.events().publish((symbol_short!("unpaused"), owner), ());
}

pub fn emit_ownership_transferred(env: &Env, previous: Address, new: Address) {
    env.events()
        .publish((symbol_short!("owner"), previous), new);
}
