#[cfg(test)]
mod common;

#[cfg(test)]
mod client_tests;

#[cfg(test)]
mod auth_tests;



#[cfg(test)]
mod reservation_tests;
