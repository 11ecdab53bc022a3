//! Format module tests.


#[cfg(feature = "json")]
mod json_tests;
#[cfg(feature = "xml")]
mod xml_tests;
