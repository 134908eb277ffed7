/*
This module is the typed surface of the tenant REST API.

Every operation goes through one explicitly constructed bearer-token
client; the per-area API structs (inventory, transactions, users,
assistant, cdFMC) borrow it, mirroring how the service groups its
endpoints. Nothing here retries: callers decide what a failed call means.
*/

pub mod assistant;
pub mod cdfmc;
pub mod client;
pub mod inventory;
pub mod transactions;
pub mod users;
