//! 사용자 식별자 값 타입
//!
//! MongoDB의 `ObjectId`를 감싸서 나머지 코드가 저장소 고유의 ID 인코딩에
//! 의존하지 않도록 합니다. 외부에서 들어온 문자열은 [`UserId::parse`]로만
//! 식별자가 되며, 형식이 맞지 않는 문자열은 "존재하지 않는 ID"와 동일하게 취급됩니다.

use std::fmt;
use std::str::FromStr;
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// 저장소가 부여한 사용자 식별자 (24자리 16진수)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UserId(ObjectId);

impl UserId {
    /// 새 식별자를 생성합니다. 저장소 구현체만 사용합니다.
    pub fn generate() -> Self {
        Self(ObjectId::new())
    }

    /// 문자열을 식별자로 해석합니다.
    ///
    /// 저장소 고유 형식(24자리 16진수)이 아니면 `None`을 반환합니다.
    ///
    /// ```rust,ignore
    /// assert!(UserId::parse("65f1c2a9e4b0a1b2c3d4e5f6").is_some());
    /// assert!(UserId::parse("not-a-real-id").is_none());
    /// ```
    pub fn parse(raw: &str) -> Option<Self> {
        ObjectId::parse_str(raw).ok().map(Self)
    }

    pub fn to_hex(&self) -> String {
        self.0.to_hex()
    }

    pub fn as_object_id(&self) -> ObjectId {
        self.0
    }
}

impl From<ObjectId> for UserId {
    fn from(oid: ObjectId) -> Self {
        Self(oid)
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.to_hex())
    }
}

impl FromStr for UserId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("invalid user id: {}", s))
    }
}

impl Serialize for UserId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for UserId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
