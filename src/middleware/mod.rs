//! Request-scoped helpers layered over the session store.

pub mod flash;
