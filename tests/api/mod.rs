mod booking_tests;
mod guide_tests;
mod health_tests;
