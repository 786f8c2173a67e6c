//! Inputs a page is rendered from.

use ayur_auth::AuthContext;
use ayur_commerce::cart::Cart;
use ayur_commerce::catalog::{Catalog, CatalogQuery};
use ayur_commerce::checkout::PaymentMethodKind;
use ayur_commerce::programs::{consultation_types, treatment_programs, ConsultationType, TreatmentProgram};

/// Everything a renderer may read. Passed explicitly to every page.
#[derive(Debug, Clone)]
pub struct ViewContext<'a> {
    pub auth: AuthContext,
    pub cart: &'a Cart,
    pub catalog: &'a Catalog,
    /// Marketplace search, category and sort.
    pub query: CatalogQuery,
    /// Payment method selected on the payment page.
    pub payment_method: PaymentMethodKind,
    pub programs: Vec<TreatmentProgram>,
    pub consultations: Vec<ConsultationType>,
}

impl<'a> ViewContext<'a> {
    pub fn new(auth: AuthContext, cart: &'a Cart, catalog: &'a Catalog) -> Self {
        Self {
            auth,
            cart,
            catalog,
            query: CatalogQuery::default(),
            payment_method: PaymentMethodKind::default(),
            programs: treatment_programs(),
            consultations: consultation_types(),
        }
    }

    pub fn with_query(mut self, query: CatalogQuery) -> Self {
        self.query = query;
        self
    }

    pub fn with_payment_method(mut self, kind: PaymentMethodKind) -> Self {
        self.payment_method = kind;
        self
    }

    pub fn is_authenticated(&self) -> bool {
        self.auth.is_authenticated()
    }

    /// Where a member-only call to action leads: the target when signed in,
    /// the sign-in page otherwise.
    pub fn gated(&self, target: crate::Route) -> &'static str {
        if self.is_authenticated() {
            target.path()
        } else {
            crate::Route::Auth.path()
        }
    }
}
