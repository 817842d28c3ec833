use crate::shared::browser::alert;
use crate::shared::components::data_table::{text_cell, Column, DataTable, TableRow};
use crate::shared::components::descriptor_form::DescriptorForm;
use crate::shared::components::drawer::Drawer;
use crate::shared::components::page_header::PageHeader;
use crate::shared::icons::icon;
use crate::shared::list_utils::{cmp_text, Searchable, Sortable};
use crate::shared::state::app_stores::{delete_record, save_record, use_stores};
use contracts::domain::a003_customer::aggregate::{Customer, CustomerId};
use contracts::domain::common::AggregateId;
use leptos::prelude::*;
use std::cmp::Ordering;

#[derive(Clone, Debug, PartialEq)]
pub struct CustomerRow {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
}

impl From<Customer> for CustomerRow {
    fn from(c: Customer) -> Self {
        Self {
            id: c.id.as_string(),
            phone: c.display_phone(),
            address: c.address.format(),
            name: c.name,
            email: c.email,
        }
    }
}

impl Searchable for CustomerRow {
    fn search_cells(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            self.email.clone(),
            self.phone.clone(),
            self.address.clone(),
        ]
    }
}

impl Sortable for CustomerRow {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "name" => cmp_text(&self.name, &other.name),
            "email" => cmp_text(&self.email, &other.email),
            "address" => cmp_text(&self.address, &other.address),
            _ => Ordering::Equal,
        }
    }
}

impl TableRow for CustomerRow {
    fn row_id(&self) -> String {
        self.id.clone()
    }
}

fn customer_columns() -> Vec<Column<CustomerRow>> {
    vec![
        Column::new("name", "Name", |r: &CustomerRow| text_cell(r.name.clone())).sortable(),
        Column::new("email", "Email", |r: &CustomerRow| text_cell(r.email.clone())).sortable(),
        Column::new("phone", "Phone", |r: &CustomerRow| text_cell(r.phone.clone())),
        Column::new("address", "Address", |r: &CustomerRow| text_cell(r.address.clone())).sortable(),
    ]
}

#[component]
#[allow(non_snake_case)]
pub fn CustomerList() -> impl IntoView {
    let stores = use_stores();
    // (record, is_new)
    let editing = RwSignal::new(None::<(Customer, bool)>);
    let selected = RwSignal::new(None::<String>);

    let rows = Signal::derive(move || {
        stores.customers.with(|s| {
            s.all()
                .iter()
                .cloned()
                .map(CustomerRow::from)
                .collect::<Vec<_>>()
        })
    });

    let open_existing = Callback::new(move |row: CustomerRow| {
        let id = CustomerId::from_string(&row.id);
        if let Some(customer) = stores.customers.with_untracked(|s| s.get_by_id(&id).cloned()) {
            selected.set(Some(row.id));
            editing.set(Some((customer, false)));
        }
    });

    let delete_customer = Callback::new(move |row: CustomerRow| {
        delete_record(stores.customers, &CustomerId::from_string(&row.id));
    });

    let close = Callback::new(move |_| {
        editing.set(None);
        selected.set(None);
    });

    view! {
        <div class="page">
            <PageHeader title="Customers".to_string()>
                <button
                    class="button button--primary"
                    on:click=move |_| {
                        selected.set(None);
                        editing.set(Some((Customer::new_for_insert(), true)));
                    }
                >
                    {icon("plus")}
                    "Add Customer"
                </button>
            </PageHeader>

            <DataTable
                rows=rows
                columns=customer_columns()
                selected_id=Signal::derive(move || selected.get())
                on_row_click=open_existing
                on_delete=delete_customer
                search_placeholder="Search customers..."
            />

            {move || editing.get().map(|(customer, is_new)| view! {
                <CustomerDrawer customer=customer is_new=is_new on_close=close />
            })}
        </div>
    }
}

#[component]
fn CustomerDrawer(customer: Customer, is_new: bool, on_close: Callback<()>) -> impl IntoView {
    let stores = use_stores();
    let form = RwSignal::new(customer);

    let save = move |_| {
        let customer = form.get_untracked();
        if let Err(e) = customer.validate() {
            alert(&e.to_string());
            return;
        }
        if save_record(stores.customers, customer, is_new) {
            on_close.run(());
        }
    };

    view! {
        <Drawer
            title=if is_new { "Add Customer".to_string() } else { "Edit Customer".to_string() }
            on_close=on_close
        >
            <DescriptorForm form=form />
            <div class="details-actions">
                <button class="button button--primary" on:click=save>
                    {icon("save")}
                    "Save"
                </button>
                <button class="button button--secondary" on:click=move |_| on_close.run(())>
                    "Cancel"
                </button>
            </div>
        </Drawer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a003_customer::seed::seed_customers;

    #[test]
    fn test_row_formats_phone_and_address() {
        let customer = seed_customers().remove(0);
        let expected_address = customer.address.format();
        let expected_phone = customer.display_phone();
        let row = CustomerRow::from(customer);
        assert_eq!(row.address, expected_address);
        assert_eq!(row.phone, expected_phone);
    }

    #[test]
    fn test_search_by_email() {
        let customer = seed_customers().remove(0);
        let email = customer.email.to_uppercase();
        assert!(CustomerRow::from(customer).matches_filter(&email));
    }
}
