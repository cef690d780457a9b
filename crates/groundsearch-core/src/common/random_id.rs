use rand::Rng;

const SESSION_ID_LEN: usize = 12;

/// Short random alphanumeric token used as an opaque session id.
///
/// Uniqueness is probabilistic only.
pub fn generate_session_id() -> String {
    rand::thread_rng()
        .sample_iter(&rand::distributions::Alphanumeric)
        .take(SESSION_ID_LEN)
        .map(char::from)
        .collect()
}
