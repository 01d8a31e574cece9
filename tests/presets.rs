use fxa_endpoints::{EndpointConfig, Environment};

struct Expected {
    label: &'static str,
    auth: &'static str,
    oauth: &'static str,
    profile: &'static str,
    sign_in: &'static str,
    settings: &'static str,
    force_auth: &'static str,
}

fn check(config: &EndpointConfig, expected: &Expected) {
    assert_eq!(config.label(), expected.label);
    assert_eq!(config.auth_server_url().as_str(), expected.auth);
    assert_eq!(config.oauth_server_url().as_str(), expected.oauth);
    assert_eq!(config.profile_server_url().as_str(), expected.profile);
    assert_eq!(config.sign_in_url().as_str(), expected.sign_in);
    assert_eq!(config.settings_url().as_str(), expected.settings);
    assert_eq!(config.force_auth_url().as_str(), expected.force_auth);
}

#[test]
fn stable_dev() {
    check(
        &EndpointConfig::stable_dev(),
        &Expected {
            label: "StableDev",
            auth: "https://stable.dev.lcip.org/auth/v1",
            oauth: "https://oauth-stable.dev.lcip.org",
            profile: "https://stable.dev.lcip.org/profile",
            sign_in: "https://stable.dev.lcip.org/signin?service=sync&context=fx_ios_v1",
            settings: "https://stable.dev.lcip.org/settings?context=fx_ios_v1",
            force_auth: "https://stable.dev.lcip.org/force_auth?service=sync&context=fx_ios_v1",
        },
    );
}

#[test]
fn latest_dev() {
    check(
        &EndpointConfig::latest_dev(),
        &Expected {
            label: "LatestDev",
            auth: "https://latest.dev.lcip.org/auth/v1",
            oauth: "https://oauth-latest.dev.lcip.org",
            profile: "https://latest.dev.lcip.org/profile",
            sign_in: "https://latest.dev.lcip.org/signin?service=sync&context=fx_ios_v1",
            settings: "https://latest.dev.lcip.org/settings?context=fx_ios_v1",
            force_auth: "https://latest.dev.lcip.org/force_auth?service=sync&context=fx_ios_v1",
        },
    );
}

#[test]
fn stage() {
    check(
        &EndpointConfig::stage(),
        &Expected {
            label: "Stage",
            auth: "https://api-accounts.stage.mozaws.net/v1",
            oauth: "https://oauth.stage.mozaws.net/v1",
            profile: "https://profile.stage.mozaws.net/v1",
            sign_in: "https://accounts.stage.mozaws.net/signin?service=sync&context=fx_ios_v1",
            settings: "https://accounts.stage.mozaws.net/settings?context=fx_ios_v1",
            force_auth:
                "https://accounts.stage.mozaws.net/force_auth?service=sync&context=fx_ios_v1",
        },
    );
}

#[test]
fn production() {
    check(
        &EndpointConfig::production(),
        &Expected {
            label: "Production",
            auth: "https://api.accounts.firefox.com/v1",
            oauth: "https://oauth.accounts.firefox.com/v1",
            profile: "https://profile.accounts.firefox.com/v1",
            sign_in: "https://accounts.firefox.com/signin?service=sync&context=fx_ios_v1",
            settings: "https://accounts.firefox.com/settings?context=fx_ios_v1",
            force_auth: "https://accounts.firefox.com/force_auth?service=sync&context=fx_ios_v1",
        },
    );
}

#[test]
fn force_auth_never_gets_second_question_mark() {
    for env in Environment::ALL {
        let config = env.config();
        for url in [config.sign_in_url(), config.force_auth_url()] {
            assert_eq!(url.as_str().matches('?').count(), 1, "{url}");
            assert!(url.as_str().ends_with("&context=fx_ios_v1"), "{url}");
        }
    }
}

#[test]
fn factories_return_fresh_equal_values() {
    let a = EndpointConfig::production();
    let b = EndpointConfig::production();
    assert_eq!(a, b);
    assert_ne!(a, EndpointConfig::stage());

    // Consuming one instance leaves the other intact.
    let text: String = a.force_auth_url().clone().into();
    drop(a);
    assert_eq!(b.force_auth_url().as_str(), text);
    assert_eq!(b.label(), "Production");
}

#[test]
fn presets_usable_across_threads() {
    let handles: Vec<_> = Environment::ALL
        .into_iter()
        .map(|env| std::thread::spawn(move || env.config()))
        .collect();
    for (handle, env) in handles.into_iter().zip(Environment::ALL) {
        assert_eq!(handle.join().unwrap().label(), env.label());
    }
}
