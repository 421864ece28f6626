use bnb_core::domain::value_objects::{LocationPopularity, PlatformAnalytics};
use bnb_core::services::UserUpdate;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Partial profile update; absent fields are left unchanged
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRequest {
    #[validate(length(min = 3, max = 30))]
    pub username: Option<String>,

    #[validate(email)]
    pub email: Option<String>,

    #[validate(length(min = 8, max = 128))]
    pub password: Option<String>,
}

impl From<UpdateUserRequest> for UserUpdate {
    fn from(request: UpdateUserRequest) -> Self {
        UserUpdate {
            username: request.username,
            email: request.email,
            password: request.password,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeRoleRequest {
    /// `guest`, `host` or `admin`
    pub role: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsResponse {
    pub total_bookings: u64,
    pub total_revenue: f64,
    pub popular_locations: Vec<PopularLocation>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PopularLocation {
    pub location: String,
    pub bookings: u64,
}

impl From<PlatformAnalytics> for AnalyticsResponse {
    fn from(analytics: PlatformAnalytics) -> Self {
        Self {
            total_bookings: analytics.total_bookings,
            total_revenue: analytics.total_revenue,
            popular_locations: analytics
                .popular_locations
                .into_iter()
                .map(|LocationPopularity { location, bookings }| PopularLocation { location, bookings })
                .collect(),
        }
    }
}
