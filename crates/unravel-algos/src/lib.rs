//! Unravel algorithm circuits
//!
//! Pure builders for the textbook algorithms shown by the dashboard and CLI.
//! Every builder validates its inputs and returns an [`AlgoResult`]; none of
//! them touch global state, and randomness only enters through an injected
//! [`rand::Rng`].
//!
//! | Algorithm | Oracle builders | Assembler |
//! |-----------|-----------------|-----------|
//! | Deutsch-Jozsa | [`constant_oracle`], [`balanced_oracle`] | [`deutsch_jozsa()`] |
//! | Bernstein-Vazirani | [`bernstein_vazirani_oracle`] | [`bernstein_vazirani()`] |
//! | Entanglement | | [`ghz_state`], [`w_state`] |
//!
//! # Example
//!
//! ```rust
//! use unravel_algos::{BitString, bernstein_vazirani, bernstein_vazirani_oracle};
//!
//! let secret: BitString = "110".parse().unwrap();
//! let oracle = bernstein_vazirani_oracle(3, &secret).unwrap();
//! let circuit = bernstein_vazirani(3, &oracle).unwrap();
//! assert_eq!(circuit.num_qubits(), 4);
//! assert_eq!(circuit.num_clbits(), 3);
//! ```

pub mod bernstein_vazirani;
pub mod bitstring;
pub mod descriptor;
pub mod deutsch_jozsa;
pub mod entanglement;
pub mod error;
mod kickback;
pub mod request;

pub use bernstein_vazirani::{
    SecretMode, bernstein_vazirani, bernstein_vazirani_oracle, random_secret,
};
pub use bitstring::BitString;
pub use descriptor::{
    AlgorithmDescriptor, AlgorithmKind, AlgorithmSelection, Reference, SourceListing,
};
pub use deutsch_jozsa::{
    BalancedPattern, DjFunction, balanced_oracle, constant_oracle, deutsch_jozsa,
};
pub use entanglement::{Scheme, ghz_state, w_angles, w_state};
pub use error::{AlgoError, AlgoResult};
pub use request::{AlgorithmRequest, BuiltCircuit};
