//! Route conventions for the prediction front end.

/// Where unauthenticated visitors are sent.
pub const LOGIN_ROUTE: &str = "/prediction/login";

/// The protected case-intake view.
pub const ADD_CASE_ROUTE: &str = "/prediction/cases/add";

/// Case listing, shown after a result has been acknowledged.
pub const CASES_ROUTE: &str = "/prediction/cases/view";

/// Hosted prediction service that accepts new cases.
pub const DEFAULT_PREDICTION_ENDPOINT: &str =
    "https://tech-frontier-2-3vgy.onrender.com/prediction/cases/add";
