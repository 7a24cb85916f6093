pub mod billing_event;
