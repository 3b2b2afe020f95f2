use twdata_core::{ListingApplication, ListingQuery};
use twdata_types::Capability;

use crate::Twdata;
use crate::router::macros::twdata_router_method;

impl Twdata {
    twdata_router_method! {
        /// Listing applications, optionally narrowed to one year or symbol.
        method: listing_applications,
        fan_out: listing_applications_all,
        arg: q: &ListingQuery,
        returns: Vec<ListingApplication>,
        accessor: as_listing_applications_provider,
        capability: Capability::ListingApplications,
        call: listing_applications
    }
}
