//! Per-route decoders.
//!
//! Each decoder is a pure function of the parameter bag. It either builds a
//! complete [`Destination`] or reports why it could not; it never returns a
//! partially filled value. `ref_tag` is optional on every project route.

use crate::destination::{
    CheckoutDetail, Destination, DiscoveryDetail, PaymentDetail, PledgeDetail, ProjectCheckoutDetail,
    ProjectDetail, TabDetail, UpdateDetail,
};
use crate::discovery::{DiscoveryFilter, FromParams};
use crate::routing::params::{DecodeError, DecodeResult, Params};

/// Signature shared by every route decoder.
pub type Decoder = fn(&Params) -> DecodeResult<Destination>;

// --- Tabs -------------------------------------------------------------------

pub fn activity(_: &Params) -> DecodeResult<Destination> {
    Ok(Destination::Tab(TabDetail::Activity))
}

pub fn authorize(_: &Params) -> DecodeResult<Destination> {
    Ok(Destination::Tab(TabDetail::Login))
}

pub fn me(_: &Params) -> DecodeResult<Destination> {
    Ok(Destination::Tab(TabDetail::Me))
}

pub fn search(_: &Params) -> DecodeResult<Destination> {
    Ok(Destination::Tab(TabDetail::Search))
}

pub fn signup(_: &Params) -> DecodeResult<Destination> {
    Ok(Destination::Signup)
}

pub fn dashboard(params: &Params) -> DecodeResult<Destination> {
    let project = params.param("project_param")?;
    Ok(Destination::Tab(TabDetail::Dashboard { project }))
}

// --- Checkout payments --------------------------------------------------------

fn payments(params: &Params, payment: PaymentDetail) -> DecodeResult<Destination> {
    let id = params.required_int("checkout_param")?;
    Ok(Destination::Checkout {
        id,
        detail: CheckoutDetail::Payments(payment),
    })
}

pub fn payments_root(params: &Params) -> DecodeResult<Destination> {
    payments(params, PaymentDetail::Root)
}

pub fn payments_new(params: &Params) -> DecodeResult<Destination> {
    payments(params, PaymentDetail::New)
}

pub fn payments_use_stored_card(params: &Params) -> DecodeResult<Destination> {
    payments(params, PaymentDetail::UseStoredCard)
}

// --- Discovery ------------------------------------------------------------------

fn discovery_filter(params: &Params) -> DecodeResult<DiscoveryFilter> {
    DiscoveryFilter::from_params(params).map_err(|e| DecodeError::InvalidFilter(Box::new(e)))
}

fn discovery_tab(filter: DiscoveryFilter, detail: DiscoveryDetail) -> Destination {
    Destination::Tab(TabDetail::Discovery { filter, detail })
}

pub fn discovery(params: &Params) -> DecodeResult<Destination> {
    let filter = discovery_filter(params)?;
    Ok(discovery_tab(filter, DiscoveryDetail::Root))
}

pub fn discovery_advanced(params: &Params) -> DecodeResult<Destination> {
    let filter = discovery_filter(params)?;
    Ok(discovery_tab(filter, DiscoveryDetail::Advanced))
}

/// Serves both the category and category/subcategory templates.
pub fn category(params: &Params) -> DecodeResult<Destination> {
    let filter = discovery_filter(params)?;
    let category = params.param("category_param")?;
    let subcategory = params.optional_param("subcategory_param");
    Ok(discovery_tab(filter, DiscoveryDetail::Category { category, subcategory }))
}

// --- Projects -------------------------------------------------------------------

fn project(params: &Params, detail: ProjectDetail) -> DecodeResult<Destination> {
    let param = params.param("project_param")?;
    Ok(Destination::project(param, detail, params.ref_tag()))
}

pub fn project_root(params: &Params) -> DecodeResult<Destination> {
    project(params, ProjectDetail::Root)
}

pub fn thanks(params: &Params) -> DecodeResult<Destination> {
    let id = params.required_int("checkout_param")?;
    project(
        params,
        ProjectDetail::Checkout {
            id,
            detail: ProjectCheckoutDetail::Thanks,
        },
    )
}

pub fn project_comments(params: &Params) -> DecodeResult<Destination> {
    project(params, ProjectDetail::Comments)
}

pub fn creator_bio(params: &Params) -> DecodeResult<Destination> {
    project(params, ProjectDetail::CreatorBio)
}

pub fn friends(params: &Params) -> DecodeResult<Destination> {
    project(params, ProjectDetail::Friends)
}

pub fn message_creator(params: &Params) -> DecodeResult<Destination> {
    project(params, ProjectDetail::MessageCreator)
}

pub fn pledge_root(params: &Params) -> DecodeResult<Destination> {
    project(params, ProjectDetail::Pledge(PledgeDetail::Root))
}

pub fn pledge_big_print(params: &Params) -> DecodeResult<Destination> {
    project(params, ProjectDetail::Pledge(PledgeDetail::BigPrint))
}

pub fn pledge_destroy(params: &Params) -> DecodeResult<Destination> {
    project(params, ProjectDetail::Pledge(PledgeDetail::Destroy))
}

pub fn pledge_edit(params: &Params) -> DecodeResult<Destination> {
    project(params, ProjectDetail::Pledge(PledgeDetail::Edit))
}

pub fn pledge_new(params: &Params) -> DecodeResult<Destination> {
    project(params, ProjectDetail::Pledge(PledgeDetail::New))
}

pub fn updates(params: &Params) -> DecodeResult<Destination> {
    project(params, ProjectDetail::Updates)
}

fn update(params: &Params, detail: UpdateDetail) -> DecodeResult<Destination> {
    let id = params.required_int("update_param")?;
    project(params, ProjectDetail::Update { id, detail })
}

pub fn update_root(params: &Params) -> DecodeResult<Destination> {
    update(params, UpdateDetail::Root)
}

pub fn update_comments(params: &Params) -> DecodeResult<Destination> {
    update(params, UpdateDetail::Comments)
}

pub fn survey(params: &Params) -> DecodeResult<Destination> {
    let id = params.required_int("survey_param")?;
    project(params, ProjectDetail::Survey { id })
}
