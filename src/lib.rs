//! # smetic-ui
//!
//! Leptos + WASM helpers for the expense tracker frontend: a dark/light theme
//! toggle persisted in `localStorage` and a show/hide toggle for password
//! inputs.
//!
//! SYSTEM CONTEXT
//! ==============
//! Both behaviors are plain functions over the element ports in [`dom`] and
//! the persistence port in [`storage`], so they run natively under test. The
//! `hydrate` feature adds the `web-sys` adapters and the `toggleTheme` /
//! `togglePassword` globals that server-rendered pages call from `onclick`.

pub mod components;
pub mod dom;
pub mod password;
pub mod storage;
pub mod theme;

#[cfg(feature = "hydrate")]
pub mod browser;

#[cfg(test)]
mod testing;
