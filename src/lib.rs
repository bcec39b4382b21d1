//  _   _
// | |_(_) ___ _ __ _ __   __ _ ___ ___
// | __| |/ _ \ '__| '_ \ / _` / __/ __|
// | |_| |  __/ |  | |_) | (_| \__ \__ \
//  \__|_|\___|_|  | .__/ \__,_|___/___/
//                 |_|
//
// Version : 0.1.0
// License : MIT

//! Tiered random password generation.
//!
//! Passwords are assembled character by character from tiered banks
//! (letters, special symbols, ambiguous punctuation); a frequency token
//! caps which tiers a draw may reach. See [`passgen::PasswordGenerator`].

pub mod passgen;
