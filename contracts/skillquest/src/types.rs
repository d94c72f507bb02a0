use soroban_sdk::{contracttype, Address, Env, String, Vec};

/// Platform fee retained on every paid enrollment, in percent.
pub const PLATFORM_FEE_PERCENT: i128 = 5;

/// One whole token in base units (7 decimals, the Stellar asset convention).
pub const TOKEN_UNIT: i128 = 10_000_000;

/// Welcome bonus paid out of the reward pool on registration: 10 tokens.
pub const WELCOME_BONUS: i128 = 10 * TOKEN_UNIT;

/// Progress value at which a course counts as completed.
pub const PROGRESS_COMPLETE: u32 = 100;

/// Base URL for certificate metadata; the certificate id is appended as a
/// decimal string with no leading zeros.
pub const CERTIFICATE_URI_BASE: &[u8] = b"https://skillquest.app/certificate/";

/// On-chain record of a registered learner.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct User {
    /// Unique identifier (auto-incremented, starting at 1).
    pub id: u64,
    /// Ledger timestamp of registration.
    pub registered_at: u64,
    /// Cumulative experience points, increased only by course completion.
    pub xp: u32,
    /// Courses the user is or has been enrolled in, in enrollment order.
    pub enrolled_courses: Vec<u64>,
    /// Courses the user has completed, in completion order.
    pub completed_courses: Vec<u64>,
    /// Certificates issued to the user, in issuance order.
    pub certificates: Vec<u64>,
}

/// On-chain record of a course.
///
/// A single record carries metadata, pricing, rewards, prerequisites and the
/// live activity counters; every mutation rewrites it inside one transaction.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Course {
    /// Unique identifier (auto-incremented, starting at 1).
    pub id: u64,
    /// Address that created the course and receives enrollment payments.
    pub instructor: Address,
    /// Off-chain content reference (e.g. IPFS URI).
    pub metadata_uri: String,
    pub title: String,
    pub description: String,
    /// Enrollment price in token base units. Zero means free.
    pub price: i128,
    /// Minimum enrollment period in seconds before completion is accepted.
    pub duration: u64,
    /// Experience points awarded on completion.
    pub xp_reward: u32,
    /// Token reward paid from the reward pool on completion.
    pub token_reward: i128,
    /// Courses that must be completed before enrolling.
    pub prerequisites: Vec<u64>,
    pub tags: Vec<String>,
    /// Set false by the instructor to retire the course.
    pub is_active: bool,
    /// Blocks new enrollments while leaving existing ones untouched.
    pub is_paused: bool,
    pub enrollment_count: u32,
    pub completion_count: u32,
    /// Ledger timestamp of creation.
    pub created_at: u64,
}

/// Per-(course, user) enrollment state. Existence of the record is the
/// "enrolled" flag; progress only ever moves upward.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Enrollment {
    /// Completion percentage, 0–100, monotonically non-decreasing.
    pub progress: u32,
    /// Ledger timestamp of enrollment; anchors the minimum-duration gate.
    pub enrolled_at: u64,
}

/// Proof-of-completion record. Immutable except for revocation.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Certificate {
    /// Unique identifier (auto-incremented, starting at 1).
    pub id: u64,
    pub course_id: u64,
    pub recipient: Address,
    /// Ledger timestamp of issuance.
    pub issued_at: u64,
    /// Expiry timestamp; 0 means the certificate never expires.
    pub expires_at: u64,
    pub is_revoked: bool,
    pub metadata_uri: String,
}

/// Storage keys for all platform data.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    /// Platform owner address.
    Owner,
    /// Address of the token contract used for payments and rewards.
    TokenContract,
    /// Global emergency-stop flag.
    Paused,
    /// Monotonic counters, incremented only on successful creation.
    UserCount,
    CourseCount,
    CertificateCount,
    /// Running accumulator of withdrawable platform fees.
    CollectedFees,
    /// Address -> User.
    User(Address),
    /// Course id -> Course.
    Course(u64),
    /// (Course id, student) -> Enrollment.
    Enrollment(u64, Address),
    /// Certificate id -> Certificate.
    Certificate(u64),
    /// Deduplicated set of all tags ever used, in first-use order.
    Tags,
    /// Instructor -> ids of courses they created.
    InstructorCourses(Address),
}

/// Render `certificate_id` into the fixed metadata URI.
pub fn certificate_uri(env: &Env, certificate_id: u64) -> String {
    const BASE_LEN: usize = CERTIFICATE_URI_BASE.len();
    // u64::MAX has 20 decimal digits.
    let mut buf = [0u8; BASE_LEN + 20];
    buf[..BASE_LEN].copy_from_slice(CERTIFICATE_URI_BASE);
    let digits = write_decimal(&mut buf[BASE_LEN..], certificate_id);
    String::from_bytes(env, &buf[..BASE_LEN + digits])
}

/// Write `value` as decimal digits at the start of `buf`, returning the
/// number of bytes written. `buf` must hold at least 20 bytes.
fn write_decimal(buf: &mut [u8], mut value: u64) -> usize {
    let mut tmp = [0u8; 20];
    let mut at = tmp.len();
    loop {
        at -= 1;
        tmp[at] = b'0' + (value % 10) as u8;
        value /= 10;
        if value == 0 {
            break;
        }
    }
    let len = tmp.len() - at;
    buf[..len].copy_from_slice(&tmp[at..]);
    len
}
