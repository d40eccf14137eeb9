/// Validated identifier newtype returned by the normalizer.
pub mod identifier;
/// Table of initialisms kept in canonical upper-case form.
pub mod initialisms;
/// Raw-name to identifier normalization.
pub mod normalizer;
