//! Immutable authentication tokens, lifecycle helpers, and composite-string rendering.

// self
use crate::{
	_prelude::*,
	auth::{
		CanonicalRequest, Nonce, RequestTarget, TokenId,
		token::{
			kind::{EntityType, TokenKind},
			secret::TokenSecret,
		},
	},
	error::{InvalidTokenError, SigningError},
};

const SEGMENT_DELIMITER: char = ':';

/// Current lifecycle status for a token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TokenStatus {
	/// Token is not yet valid because its creation instant is in the future.
	Pending,
	/// Token is currently valid.
	Active,
	/// Token reached its expiry instant.
	Expired,
}

/// Credential issued by the authentication service.
///
/// Tokens never change after construction; a refresh yields a new value. The invariants
/// (non-empty id and secret, `created_at <= expires_at`) are checked by [`Self::new`] and again
/// when deserializing.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "TokenDocument", into = "TokenDocument")]
pub struct AuthenticationToken {
	entity_type: EntityType,
	kind: TokenKind,
	created_at: OffsetDateTime,
	id: TokenId,
	secret: TokenSecret,
	expires_at: OffsetDateTime,
}
impl AuthenticationToken {
	/// Validates the parts and builds a token.
	pub fn new(
		entity_type: EntityType,
		kind: TokenKind,
		created_at: OffsetDateTime,
		id: impl AsRef<str>,
		secret: impl Into<String>,
		expires_at: OffsetDateTime,
	) -> Result<Self, InvalidTokenError> {
		let id = id.as_ref();

		if id.is_empty() {
			return Err(InvalidTokenError::EmptyId);
		}

		let id = TokenId::new(id)?;
		let secret = TokenSecret::new(secret);

		if secret.is_empty() {
			return Err(InvalidTokenError::EmptySecret);
		}
		if created_at > expires_at {
			return Err(InvalidTokenError::CreationAfterExpiry { created_at, expires_at });
		}

		Ok(Self { entity_type, kind, created_at, id, secret, expires_at })
	}

	/// Parses the JSON token document, reporting the failing field path on error.
	pub fn from_json(payload: &str) -> Result<Self> {
		let mut de = serde_json::Deserializer::from_str(payload);

		serde_path_to_error::deserialize(&mut de)
			.map_err(|source| Error::Decode { source, status: None })
	}

	/// Scope the token was issued for.
	pub fn entity_type(&self) -> EntityType {
		self.entity_type
	}

	/// Rendering mode of the trailing composite segment.
	pub fn kind(&self) -> TokenKind {
		self.kind
	}

	/// Creation instant.
	pub fn created_at(&self) -> OffsetDateTime {
		self.created_at
	}

	/// Token identifier.
	pub fn id(&self) -> &TokenId {
		&self.id
	}

	/// Token secret; callers must avoid logging the exposed value.
	pub fn secret(&self) -> &TokenSecret {
		&self.secret
	}

	/// Expiry instant.
	pub fn expires_at(&self) -> OffsetDateTime {
		self.expires_at
	}

	/// Computes the lifecycle status at a given instant.
	pub fn status_at(&self, instant: OffsetDateTime) -> TokenStatus {
		if instant < self.created_at {
			return TokenStatus::Pending;
		}
		if instant >= self.expires_at {
			return TokenStatus::Expired;
		}

		TokenStatus::Active
	}

	/// Convenience helper that checks the status using the current UTC instant.
	pub fn status(&self) -> TokenStatus {
		self.status_at(OffsetDateTime::now_utc())
	}

	/// Returns `true` if the token has expired at the provided instant.
	pub fn is_expired_at(&self, instant: OffsetDateTime) -> bool {
		matches!(self.status_at(instant), TokenStatus::Expired)
	}

	/// Fails with [`InvalidTokenError::Expired`] once the token has expired.
	pub fn ensure_unexpired_at(&self, instant: OffsetDateTime) -> Result<(), InvalidTokenError> {
		if self.is_expired_at(instant) {
			Err(InvalidTokenError::Expired { expires_at: self.expires_at })
		} else {
			Ok(())
		}
	}

	/// Renders the composite token string for a request.
	///
	/// Simple tokens render `ENTITY:SIMPLE:id:secret` and ignore the request. HMAC tokens render
	/// `ENTITY:HMAC_SHA1:id:nonce:signature`, keeping an empty nonce slot when no nonce is used;
	/// the signature covers every field of `target`.
	pub fn composite(
		&self,
		target: RequestTarget<'_>,
		nonce: Option<&Nonce>,
	) -> Result<String, SigningError> {
		let d = SEGMENT_DELIMITER;
		let (entity, kind, id) = (self.entity_type, self.kind, &self.id);

		match kind {
			TokenKind::Simple => Ok(format!("{entity}{d}{kind}{d}{id}{d}{}", self.secret.expose())),
			TokenKind::HmacSha1 => {
				let signature = CanonicalRequest::new(target, id)
					.with_nonce(nonce)
					.sign(&self.secret)?;
				let nonce = nonce.map(Nonce::as_str).unwrap_or_default();

				Ok(format!("{entity}{d}{kind}{d}{id}{d}{nonce}{d}{signature}"))
			},
		}
	}
}
impl Debug for AuthenticationToken {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("AuthenticationToken")
			.field("entity_type", &self.entity_type)
			.field("kind", &self.kind)
			.field("created_at", &self.created_at)
			.field("id", &self.id)
			.field("secret", &"<redacted>")
			.field("expires_at", &self.expires_at)
			.finish()
	}
}

/// Wire document for [`AuthenticationToken`]; timestamps are Unix seconds.
#[derive(Clone, Debug, Serialize, Deserialize)]
struct TokenDocument {
	entity_type: EntityType,
	token_type: TokenKind,
	id: String,
	secret: String,
	#[serde(with = "time::serde::timestamp")]
	created_at: OffsetDateTime,
	#[serde(with = "time::serde::timestamp")]
	expires_at: OffsetDateTime,
}
impl TryFrom<TokenDocument> for AuthenticationToken {
	type Error = InvalidTokenError;

	fn try_from(doc: TokenDocument) -> Result<Self, Self::Error> {
		let TokenDocument { entity_type, token_type, id, secret, created_at, expires_at } = doc;

		Self::new(entity_type, token_type, created_at, id, secret, expires_at)
	}
}
impl From<AuthenticationToken> for TokenDocument {
	fn from(token: AuthenticationToken) -> Self {
		Self {
			entity_type: token.entity_type,
			token_type: token.kind,
			id: token.id.into(),
			secret: token.secret.expose().to_owned(),
			created_at: token.created_at,
			expires_at: token.expires_at,
		}
	}
}
