pub mod inquiries;
