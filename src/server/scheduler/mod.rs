//! Cron jobs run alongside the HTTP server.

pub mod conflict_reconciliation;
