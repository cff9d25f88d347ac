//! Social identity contracts.
//!
//! Both services link an external identity to a user record in one of the
//! application's schemas. Each surfaces a single coarse error type covering
//! authentication and backend failures alike.

use crate::error::{FacebookError, TwitterError};

/// Facebook identity linking and wall posting.
pub trait FacebookService: Send + Sync {
    /// Creates a new user record carrying the Facebook identity contained
    /// in `access_token`. Returns false if the user could not be created.
    ///
    /// Fails if the username is taken or the Facebook identity is already
    /// assigned to another user.
    fn create_user_with_facebook_id(
        &self,
        schema: &str,
        username: &str,
        access_token: &str,
    ) -> Result<bool, FacebookError>;

    /// Assigns the Facebook identity contained in `access_token` to an
    /// existing user. Returns false if no such user exists.
    fn link_facebook_id(
        &self,
        schema: &str,
        username: &str,
        access_token: &str,
    ) -> Result<bool, FacebookError>;

    /// Disconnects the user from any linked Facebook identity. Succeeds
    /// even if the user does not exist or holds no link; the pair may be
    /// linked again later.
    fn unlink_facebook_id(&self, schema: &str, username: &str) -> Result<(), FacebookError>;

    /// Finds the username linked to the Facebook identity contained in
    /// `access_token`, if any.
    fn find_user(&self, schema: &str, access_token: &str) -> Result<Option<String>, FacebookError>;

    /// Posts a message to the user's wall and returns the message id, or
    /// `None` if posting did not succeed.
    fn publish_message(
        &self,
        schema: &str,
        username: &str,
        message: &str,
    ) -> Result<Option<String>, FacebookError>;
}

/// Twitter identity linking and status updates.
pub trait TwitterService: Send + Sync {
    /// Creates a new user record linked to the Twitter identity behind the
    /// token pair. Returns false if the user could not be created.
    fn create_user_with_twitter(
        &self,
        schema: &str,
        username: &str,
        token: &str,
        token_secret: &str,
    ) -> Result<bool, TwitterError>;

    /// Links an existing user to the Twitter identity behind the token
    /// pair. Returns false if no such user exists.
    fn link_user_with_twitter(
        &self,
        schema: &str,
        username: &str,
        token: &str,
        token_secret: &str,
    ) -> Result<bool, TwitterError>;

    /// Finds the user linked to the token pair and verifies the
    /// credentials are still valid.
    fn find_and_verify_user(
        &self,
        schema: &str,
        token: &str,
        token_secret: &str,
    ) -> Result<Option<String>, TwitterError>;

    /// Finds the user linked to the Twitter user id and verifies the
    /// stored credentials are still valid.
    fn find_and_verify_user_by_id(
        &self,
        schema: &str,
        twitter_user_id: &str,
    ) -> Result<Option<String>, TwitterError>;

    /// Finds the username linked to the Twitter user id without verifying
    /// credentials.
    fn find_username(
        &self,
        schema: &str,
        twitter_user_id: &str,
    ) -> Result<Option<String>, TwitterError>;

    /// Updates the user's Twitter status. Returns whether the update was
    /// accepted.
    fn update_status(
        &self,
        schema: &str,
        username: &str,
        status: &str,
    ) -> Result<bool, TwitterError>;

    /// Verifies the user's stored Twitter credentials.
    fn verify_credentials(&self, schema: &str, username: &str) -> Result<bool, TwitterError>;
}
