use crate::{
    ApiClient,
    cache::keys::{DETAIL_TTL, LIST_TTL, USERS_PREFIX, user_details_key, user_list_key},
    common::Record,
    error::Result,
    result::Ack,
};

use super::model::{ToggleStatusRequest, UpdateRolesRequest, UserListParams, UserPage};

impl ApiClient {
    pub async fn get_users(&self, params: &UserListParams, skip_cache: bool) -> Result<UserPage> {
        let suffix = params.to_query().suffix();
        self.cached_get(
            &user_list_key(&suffix),
            &format!("/usermanagement/list{}", suffix),
            LIST_TTL,
            skip_cache,
        )
        .await
    }

    pub async fn get_user_details(&self, user_id: &str, skip_cache: bool) -> Result<Record> {
        self.cached_get(
            &user_details_key(user_id),
            &format!("/usermanagement/details/{}", user_id),
            DETAIL_TTL,
            skip_cache,
        )
        .await
    }

    pub async fn update_user_roles(&self, user_id: &str, roles: &[String]) -> Result<Ack> {
        let body = UpdateRolesRequest { user_id, roles };
        self.mutate(&[USERS_PREFIX], self.post_json("/usermanagement/updateRoles", body))
            .await
    }

    /// Flips the account status, or sets it explicitly when `status` is given.
    pub async fn toggle_user_status(&self, user_id: &str, status: Option<bool>) -> Result<Ack> {
        let body = ToggleStatusRequest { user_id, status };
        self.mutate(&[USERS_PREFIX], self.post_json("/usermanagement/toggleStatus", body))
            .await
    }

    pub async fn delete_user(&self, user_id: &str) -> Result<Ack> {
        self.mutate(
            &[USERS_PREFIX],
            self.delete(&format!("/usermanagement/delete/{}", user_id)),
        )
        .await
    }
}
