use crate::shared::browser::alert;
use crate::shared::state::app_stores::{update_record, AppStores};
use contracts::domain::a001_layout::aggregate::Layout;
use leptos::prelude::*;

/// ViewModel for the layout details form
#[derive(Clone, Copy)]
pub struct LayoutDetailsViewModel {
    pub form: RwSignal<Layout>,
    /// Set after a successful save, cleared by the next edit
    pub saved: RwSignal<bool>,
}

impl LayoutDetailsViewModel {
    pub fn new(layout: Layout) -> Self {
        Self {
            form: RwSignal::new(layout),
            saved: RwSignal::new(false),
        }
    }

    /// Validate and replace the stored layout
    pub fn save_command(&self, stores: AppStores) -> bool {
        let layout = self.form.get_untracked();
        if let Err(e) = layout.validate() {
            alert(&e.to_string());
            return false;
        }
        let ok = update_record(stores.layouts, layout);
        self.saved.set(ok);
        ok
    }
}
