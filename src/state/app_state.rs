//! Application state definitions

use super::{ContactForm, ProgressTask};
use serde::Deserialize;

/// Available views in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Overview,
    Contact,
}

/// Account page data fetched once at startup
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageData {
    pub full_name: String,
    pub avatar_url: String,
    pub email: String,
    pub location: String,
    #[serde(default)]
    pub orders: Vec<Order>,
}

/// A single past order shown in the overview
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub order_id: String,
    #[serde(default)]
    pub products: Vec<String>,
    pub total: f64,
}

/// Main application state
#[derive(Debug, Default)]
pub struct AppState {
    /// Currently active view
    pub current_view: View,
    /// Page data, present once the initial fetch succeeds
    pub page_data: Option<PageData>,
    /// The contact form
    pub form: ContactForm,
    /// Demo progress task, present while running
    pub progress: Option<ProgressTask>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_state() {
        let state = AppState::default();
        assert_eq!(state.current_view, View::Overview);
        assert!(state.page_data.is_none());
        assert!(state.progress.is_none());
        assert_eq!(state.form.active_field_index, 0);
    }

    #[test]
    fn test_page_data_deserializes_camel_case() {
        let json = r#"{
            "fullName": "Jane Doe",
            "avatarUrl": "https://cdn.example.com/jane.png",
            "email": "jane.doe@example.com",
            "location": "Oslo",
            "orders": [
                {"orderId": "A-100", "products": ["Lamp", "Desk"], "total": 129.5}
            ]
        }"#;
        let data: PageData = serde_json::from_str(json).unwrap();
        assert_eq!(data.full_name, "Jane Doe");
        assert_eq!(data.location, "Oslo");
        assert_eq!(data.orders.len(), 1);
        assert_eq!(data.orders[0].order_id, "A-100");
        assert_eq!(data.orders[0].products, vec!["Lamp", "Desk"]);
        assert_eq!(data.orders[0].total, 129.5);
    }

    #[test]
    fn test_page_data_orders_default_to_empty() {
        let json = r#"{
            "fullName": "Jane Doe",
            "avatarUrl": "https://cdn.example.com/jane.png",
            "email": "jane.doe@example.com",
            "location": "Oslo"
        }"#;
        let data: PageData = serde_json::from_str(json).unwrap();
        assert!(data.orders.is_empty());
    }

    #[test]
    fn test_page_data_ignores_unknown_fields() {
        let json = r#"{
            "fullName": "Jane Doe",
            "avatarUrl": "u",
            "email": "e",
            "location": "l",
            "memberSince": "2019"
        }"#;
        let data: PageData = serde_json::from_str(json).unwrap();
        assert_eq!(data.full_name, "Jane Doe");
    }
}
