//! Wizard state and the reducer that evolves it.

use std::fmt;

use serde::{Deserialize, Serialize};
use ventureflow_domain::{ListingData, Package, UserMirror};

/// Everything the listing flow remembers between pages and sessions.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WizardState {
    #[serde(default)]
    pub selected_category_id: Option<String>,
    #[serde(default)]
    pub selected_subcategory_id: Option<String>,
    #[serde(default)]
    pub listing_form_data: ListingData,
    #[serde(default)]
    pub selected_package: Option<Package>,
    #[serde(default)]
    pub is_authenticated: bool,
    #[serde(default)]
    pub user: Option<UserMirror>,
    #[serde(default)]
    pub listing_flow_active: bool,
}

impl WizardState {
    /// Copy with every listing selection cleared and auth preserved.
    fn without_selections(&self) -> Self {
        Self {
            is_authenticated: self.is_authenticated,
            user: self.user.clone(),
            ..Self::default()
        }
    }
}

/// The only ways wizard state may change.
#[derive(Debug, Clone, PartialEq)]
pub enum WizardAction {
    SetCategory(String),
    SetSubcategory(String),
    UpdateListingData(ListingData),
    SetPackage(Option<Package>),
    Login(UserMirror),
    Logout,
    ResetForm,
    LoadState(WizardState),
    StartListingFlow,
}

impl WizardAction {
    /// Hydration must not be written back to storage.
    pub fn persists(&self) -> bool {
        !matches!(self, WizardAction::LoadState(_))
    }

    pub fn name(&self) -> &'static str {
        match self {
            WizardAction::SetCategory(_) => "SET_CATEGORY",
            WizardAction::SetSubcategory(_) => "SET_SUBCATEGORY",
            WizardAction::UpdateListingData(_) => "UPDATE_LISTING_DATA",
            WizardAction::SetPackage(_) => "SET_PACKAGE",
            WizardAction::Login(_) => "LOGIN",
            WizardAction::Logout => "LOGOUT",
            WizardAction::ResetForm => "RESET_FORM",
            WizardAction::LoadState(_) => "LOAD_STATE",
            WizardAction::StartListingFlow => "START_LISTING_FLOW",
        }
    }
}

impl fmt::Display for WizardAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Pure transition function. `state` is never modified.
pub fn reduce(state: &WizardState, action: WizardAction) -> WizardState {
    match action {
        WizardAction::SetCategory(id) => WizardState {
            selected_category_id: Some(id),
            selected_subcategory_id: None,
            listing_form_data: ListingData::new(),
            ..state.clone()
        },
        WizardAction::SetSubcategory(id) => WizardState {
            selected_subcategory_id: Some(id),
            listing_form_data: ListingData::new(),
            ..state.clone()
        },
        WizardAction::UpdateListingData(data) => {
            let mut next = state.clone();
            next.listing_form_data.extend(data);
            next
        }
        WizardAction::SetPackage(package) => WizardState {
            selected_package: package,
            ..state.clone()
        },
        WizardAction::Login(user) => WizardState {
            is_authenticated: true,
            user: Some(user),
            ..state.clone()
        },
        WizardAction::Logout => WizardState::default(),
        WizardAction::ResetForm => state.without_selections(),
        WizardAction::StartListingFlow => WizardState {
            listing_flow_active: true,
            ..state.without_selections()
        },
        WizardAction::LoadState(loaded) => loaded,
    }
}
