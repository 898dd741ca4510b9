use serde::{Deserialize, Serialize};
use validator::Validate;

use super::artist::Artist;
use super::global::{CursorPaging, ExternalUrl, Image, SpotifyType};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserProductType {
    Free,
    Open,
    Premium,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AccessTokenType {
    // The token endpoint answers with "Bearer".
    #[default]
    #[serde(rename = "bearer", alias = "Bearer")]
    Bearer,
}

/// The user shape family is reused for artists as followable entities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserType {
    User,
    Artist,
}

impl From<UserType> for SpotifyType {
    fn from(kind: UserType) -> Self {
        match kind {
            UserType::User => SpotifyType::User,
            UserType::Artist => SpotifyType::Artist,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Followers {
    /// Always null at the moment, the API does not list followers.
    pub href: Option<String>,
    pub total: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExplicitContentSettings {
    /// Explicit content should not be played.
    pub filter_enabled: bool,
    /// The setting is locked and can't be changed by the user.
    pub filter_locked: bool,
}

/// Profile details visible to any caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PublicUser {
    pub display_name: Option<String>,
    pub href: String,
    pub id: String,
    pub uri: String,
    #[serde(rename = "type")]
    pub kind: UserType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<Image>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub followers: Option<Followers>,
    pub external_urls: ExternalUrl,
}

/// The authenticated user's own profile.
///
/// Superset of [`PublicUser`]. `country`, `product` and `explicit_content`
/// are only present when the token carries `user-read-private`; `email`
/// only with `user-read-email`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrivateUser {
    pub display_name: Option<String>,
    pub href: String,
    pub id: String,
    pub uri: String,
    #[serde(rename = "type")]
    pub kind: UserType,
    pub images: Vec<Image>,
    pub followers: Followers,
    pub external_urls: ExternalUrl,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product: Option<UserProductType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explicit_content: Option<ExplicitContentSettings>,
}

impl PrivateUser {
    pub fn to_public(&self) -> PublicUser {
        self.clone().into()
    }
}

impl From<PrivateUser> for PublicUser {
    fn from(user: PrivateUser) -> Self {
        PublicUser {
            display_name: user.display_name,
            href: user.href,
            id: user.id,
            uri: user.uri,
            kind: user.kind,
            images: Some(user.images),
            followers: Some(user.followers),
            external_urls: user.external_urls,
        }
    }
}

pub type FollowedArtistCursorPaging = CursorPaging<Artist>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct FollowedArtistsResults {
    #[validate(nested)]
    pub artists: FollowedArtistCursorPaging,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessToken {
    pub access_token: String,
    pub token_type: AccessTokenType,
    /// Lifetime in seconds.
    pub expires_in: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn private_user_json() -> serde_json::Value {
        json!({
            "country": "SE",
            "display_name": "Ada",
            "email": "ada@example.com",
            "explicit_content": {"filter_enabled": false, "filter_locked": false},
            "external_urls": {"spotify": "https://open.spotify.com/user/ada"},
            "followers": {"href": null, "total": 12},
            "href": "https://api.spotify.com/v1/users/ada",
            "id": "ada",
            "images": [{"height": 300, "url": "https://i.scdn.co/image/ab6775700000ee85", "width": 300}],
            "product": "premium",
            "type": "user",
            "uri": "spotify:user:ada"
        })
    }

    #[test]
    fn test_private_user_satisfies_public_user() {
        let json = private_user_json();
        let private: PrivateUser = serde_json::from_value(json.clone()).unwrap();
        let public: PublicUser = serde_json::from_value(json).unwrap();

        assert_eq!(private.to_public(), public);
        assert_eq!(public.followers.as_ref().map(|f| f.total), Some(12));
        assert_eq!(private.product, Some(UserProductType::Premium));
    }

    #[test]
    fn test_private_user_round_trip() {
        let json = private_user_json();
        let private: PrivateUser = serde_json::from_value(json.clone()).unwrap();
        assert_eq!(serde_json::to_value(&private).unwrap(), json);
    }

    #[test]
    fn test_private_user_without_private_scopes() {
        let mut json = private_user_json();
        let object = json.as_object_mut().unwrap();
        for key in ["country", "email", "product", "explicit_content"] {
            object.remove(key);
        }

        let private: PrivateUser = serde_json::from_value(json.clone()).unwrap();
        assert!(private.country.is_none());
        assert!(private.email.is_none());
        assert!(private.product.is_none());
        assert!(private.explicit_content.is_none());
        assert_eq!(serde_json::to_value(&private).unwrap(), json);
    }

    #[test]
    fn test_public_user_minimal() {
        let user: PublicUser = serde_json::from_value(json!({
            "display_name": null,
            "external_urls": {"spotify": "https://open.spotify.com/user/someone"},
            "href": "https://api.spotify.com/v1/users/someone",
            "id": "someone",
            "type": "user",
            "uri": "spotify:user:someone"
        }))
        .unwrap();

        assert!(user.display_name.is_none());
        assert!(user.images.is_none());
        assert!(user.followers.is_none());
        assert_eq!(SpotifyType::from(user.kind), SpotifyType::User);
    }

    #[test]
    fn test_user_type_rejects_other_tags() {
        assert_eq!(
            serde_json::from_value::<UserType>(json!("artist")).unwrap(),
            UserType::Artist
        );
        assert!(serde_json::from_value::<UserType>(json!("show")).is_err());
    }

    #[test]
    fn test_access_token_accepts_capitalised_bearer() {
        let token: AccessToken = serde_json::from_value(json!({
            "access_token": "BQDj",
            "token_type": "Bearer",
            "expires_in": 3600
        }))
        .unwrap();

        assert_eq!(token.token_type, AccessTokenType::Bearer);
        assert_eq!(token.expires_in, 3600);
        assert_eq!(
            serde_json::to_value(&token).unwrap(),
            json!({"access_token": "BQDj", "token_type": "bearer", "expires_in": 3600})
        );

        assert!(serde_json::from_value::<AccessToken>(json!({
            "access_token": "BQDj",
            "token_type": "mac",
            "expires_in": 3600
        }))
        .is_err());
    }
}
