//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render desktop chrome (menu bar, docks, terminal) and the
//! draggable windows. Shared window behavior lives in `draggable_window`;
//! `projects_window` and `project_modal` only supply content and policy.

pub mod dock;
pub mod draggable_window;
pub mod mac_terminal;
pub mod mac_toolbar;
pub mod project_modal;
pub mod projects_window;
