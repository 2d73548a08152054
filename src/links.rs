// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 BluePay Labs

//! Outbound link builders.
//!
//! Pure functions producing the external URLs the product surfaces: the
//! referral share link, support chat, and community channels. Opening them
//! is a UI-layer side effect outside this crate.

use url::Url;

/// Landing page new signups are referred to.
const SIGNUP_BASE: &str = "https://bluepay-registration-signup.vercel.app/";

/// WhatsApp support line.
const SUPPORT_WHATSAPP: &str = "https://wa.me/19127037327";

/// Official Telegram channel.
const TELEGRAM_CHANNEL: &str = "https://t.me/bluepayuser_telegram_channel";

/// Telegram support contact.
const TELEGRAM_SUPPORT: &str = "https://t.me/Bluepaysupport1";

/// Community WhatsApp group.
const WHATSAPP_GROUP: &str = "https://chat.whatsapp.com/bluepay_group";

/// Official announcements channel on Telegram.
const TELEGRAM_OFFICIAL: &str = "https://t.me/bluepay_official";

/// App download page shown on the about screen.
const APP_DOWNLOAD: &str = "https://bluepayearn.netlify.app/";

/// Build the share link carrying a referral code.
pub fn referral_link(code: &str) -> Url {
    let mut url = Url::parse(SIGNUP_BASE).expect("signup base URL is valid");
    url.query_pairs_mut().append_pair("ref", code);
    url
}

/// Extract a referral code from an initial-load URL, if one is present.
pub fn referral_code_from(url: &Url) -> Option<String> {
    url.query_pairs()
        .find(|(name, _)| name == "ref")
        .map(|(_, value)| value.into_owned())
        .filter(|code| !code.is_empty())
}

pub fn support_whatsapp() -> Url {
    Url::parse(SUPPORT_WHATSAPP).expect("support URL is valid")
}

pub fn telegram_channel() -> Url {
    Url::parse(TELEGRAM_CHANNEL).expect("channel URL is valid")
}

pub fn telegram_support() -> Url {
    Url::parse(TELEGRAM_SUPPORT).expect("support URL is valid")
}

pub fn whatsapp_group() -> Url {
    Url::parse(WHATSAPP_GROUP).expect("group URL is valid")
}

pub fn telegram_official() -> Url {
    Url::parse(TELEGRAM_OFFICIAL).expect("channel URL is valid")
}

pub fn app_download() -> Url {
    Url::parse(APP_DOWNLOAD).expect("download URL is valid")
}

/// Message attached to a shared referral link.
pub fn share_message() -> &'static str {
    "Register on BluePay and start earning today - Sign up now!"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn referral_link_carries_the_code() {
        let url = referral_link("dGVzdEBl");
        assert_eq!(
            url.as_str(),
            "https://bluepay-registration-signup.vercel.app/?ref=dGVzdEBl"
        );
    }

    #[test]
    fn referral_code_round_trips_through_the_link() {
        let url = referral_link("YWRhQGV4");
        assert_eq!(referral_code_from(&url).as_deref(), Some("YWRhQGV4"));
    }

    #[test]
    fn community_and_download_urls_parse() {
        assert_eq!(telegram_official().as_str(), "https://t.me/bluepay_official");
        assert_eq!(app_download().as_str(), "https://bluepayearn.netlify.app/");
        assert_eq!(whatsapp_group().host_str(), Some("chat.whatsapp.com"));
    }

    #[test]
    fn urls_without_ref_yield_none() {
        let url = Url::parse("https://bluepay-registration-signup.vercel.app/?utm=x").unwrap();
        assert_eq!(referral_code_from(&url), None);

        let empty = Url::parse("https://bluepay-registration-signup.vercel.app/?ref=").unwrap();
        assert_eq!(referral_code_from(&empty), None);
    }
}
