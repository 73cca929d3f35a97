use crate::phonenumberutil::Operator;

/// Internal operator lookup API used to isolate the carrier table from the
/// number handling code and allow different tables to be swapped in easily.
pub(crate) trait OperatorMatcherApi: Send + Sync {
    /// Returns the carrier owning the given two-digit operator code (a string
    /// containing only ASCII digits), or `None` if no carrier claims it.
    fn match_operator_code(&self, operator_code: &str) -> Option<Operator>;
}
