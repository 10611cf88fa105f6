use rand::Rng;

/// Cover art shipped with the front-end. Interview records reference one of
/// these paths at creation time; the pick is uniform.
const COVER_IMAGES: &[&str] = &[
    "/covers/adobe.png",
    "/covers/amazon.png",
    "/covers/facebook.png",
    "/covers/hostinger.png",
    "/covers/pinterest.png",
    "/covers/quora.png",
    "/covers/reddit.png",
    "/covers/skype.png",
    "/covers/spotify.png",
    "/covers/telegram.png",
    "/covers/tiktok.png",
    "/covers/yahoo.png",
];

pub fn random_cover() -> &'static str {
    COVER_IMAGES[rand::thread_rng().gen_range(0..COVER_IMAGES.len())]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_cover_stays_in_pool() {
        for _ in 0..50 {
            assert!(COVER_IMAGES.contains(&random_cover()));
        }
    }
}
