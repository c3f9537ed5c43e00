use crate::domain::layout::LayoutUpdate;
use crate::domain::ports::ModuleRegistryBox;
use tracing::debug;

pub const MOIP_MODULE: &str = "MOIP_Transparente";
pub const ONEPAGE_CHECKOUT_HANDLE: &str = "checkout_onepage_index";
pub const MOIP_COMPAT_HANDLE: &str = "pagbank_moip_compat";

/// Loads extra checkout markup when the Moip module shares the one-page checkout.
pub struct CompatibilityLayoutPatch {
    modules: ModuleRegistryBox,
}

impl CompatibilityLayoutPatch {
    pub fn new(modules: ModuleRegistryBox) -> Self {
        Self { modules }
    }

    /// Returns whether the compatibility handle was added.
    pub fn apply(&self, layout: Option<&mut LayoutUpdate>) -> bool {
        let Some(layout) = layout else {
            return false;
        };

        if !self.modules.is_module_active(MOIP_MODULE) {
            return false;
        }

        if !layout.has_handle(ONEPAGE_CHECKOUT_HANDLE) {
            return false;
        }

        layout.add_handle(MOIP_COMPAT_HANDLE);
        debug!("Added {} layout handle", MOIP_COMPAT_HANDLE);
        true
    }
}
