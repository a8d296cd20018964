/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 15/10/26
******************************************************************************/
/// Account ids, the account field selector and the accounts response
pub mod account;
/// Authenticated HTTP transport
pub mod http;
/// Request parameter models
pub mod requests;
