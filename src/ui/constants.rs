// ui/constants.rs

pub const ART: &str = r#"
                  .                    *          .
        *                  ________         .              .
               .       ,-'        `-.
                     ,'   _______    `.          *
          .         /   ,'       `.    \                 .
                   |   /   .-"-.   \    |
    *              |  |   ( o o )  |    |       .
                   |   \   `---'   /    |               *
        .           \   `.______,'    ,'     .
                     `.            ,-'
              __________`-.____,-'_________         .
        *    '-.__                    __.-'
                  `""--..______..--""'          *
           .                .                        .
"#;

pub const TITLE: &str = r#" ____  _                  _    __       _ _
|  _ \| | __ _ _ __   ___| |_ / _| __ _| | |
| |_) | |/ _` | '_ \ / _ \ __| |_ / _` | | |
|  __/| | (_| | | | |  __/ |_|  _| (_| | | |
|_|   |_|\__,_|_| |_|\___|\__|_|  \__,_|_|_|
"#;
