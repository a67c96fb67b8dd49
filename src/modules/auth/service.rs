use anyhow::anyhow;
use chrono::Utc;
use shipboard_core::{AppError, hash_password, verify_password};
use shipboard_db::PgPool;
use shipboard_models::{LoginRequest, RegisterRequest, User, UserCredentials};
use shipboard_observability::{
    track_login_failure, track_login_success, track_session_created, track_session_expired,
    track_user_registered,
};
use shipboard_session::{SessionRecord, SessionStore};
use tracing::{info, instrument};

const INVALID_CREDENTIALS: &str = "Invalid email or password";

pub struct AuthService;

impl AuthService {
    /// Creates an account with a bcrypt-hashed password.
    ///
    /// # Errors
    ///
    /// 400 "Email already exists" when the address is taken, including when a
    /// concurrent registration wins the race to the unique index.
    #[instrument(skip(db, dto), fields(email = %dto.email))]
    pub async fn register(db: &PgPool, dto: RegisterRequest) -> Result<User, AppError> {
        let existing = sqlx::query_scalar::<_, i32>("SELECT id FROM users WHERE email = $1")
            .bind(&dto.email)
            .fetch_optional(db)
            .await?;

        if existing.is_some() {
            return Err(AppError::bad_request(anyhow!("Email already exists")));
        }

        let password_hash = hash_password(&dto.password)?;

        let user = sqlx::query_as::<_, User>(
            "INSERT INTO users (name, email, password_hash)
             VALUES ($1, $2, $3)
             RETURNING id, uid, name, email, created_at",
        )
        .bind(&dto.name)
        .bind(&dto.email)
        .bind(&password_hash)
        .fetch_one(db)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err) if db_err.is_unique_violation() => {
                AppError::bad_request(anyhow!("Email already exists"))
            }
            e => AppError::internal(e),
        })?;

        track_user_registered();
        info!(user_id = user.id, "User registered");

        Ok(user)
    }

    /// Checks the credentials and opens a 24 hour session.
    ///
    /// Returns the new session identifier with the stored record. An unknown
    /// email and a wrong password produce the same 401.
    #[instrument(skip(db, sessions, dto), fields(email = %dto.email))]
    pub async fn login(
        db: &PgPool,
        sessions: &SessionStore,
        dto: LoginRequest,
    ) -> Result<(String, SessionRecord), AppError> {
        let Some(credentials) = sqlx::query_as::<_, UserCredentials>(
            "SELECT id, email, password_hash FROM users WHERE email = $1",
        )
        .bind(&dto.email)
        .fetch_optional(db)
        .await?
        else {
            track_login_failure("unknown_user");
            return Err(AppError::unauthorized(anyhow!(INVALID_CREDENTIALS)));
        };

        if !verify_password(&dto.password, &credentials.password_hash)? {
            track_login_failure("bad_password");
            return Err(AppError::unauthorized(anyhow!(INVALID_CREDENTIALS)));
        }

        let record = SessionRecord::new(credentials.id, credentials.email, Utc::now());
        let session_id = sessions.create_session(&record).await?;

        track_session_created();
        track_login_success();
        info!(user_id = record.user_id, "User logged in");

        Ok((session_id, record))
    }

    #[instrument(skip_all)]
    pub async fn logout(sessions: &SessionStore, session_id: &str) -> Result<(), AppError> {
        sessions.expire(session_id).await?;
        track_session_expired("logout");
        Ok(())
    }
}
