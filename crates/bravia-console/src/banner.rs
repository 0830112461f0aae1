// Startup banner.

const ART: &str = r"
     ______                 _         _____                       _
     | ___ \               (_)       /  __ \                     | |
     | |_/ /_ __ __ ___   ___  __ _  | /  \/ ___  _ __  ___  ___ | | ___
     | ___ \ '__/ _` \ \ / / |/ _` | | |    / _ \| '_ \/ __|/ _ \| |/ _ \
     | |_/ / | | (_| |\ V /| | (_| | | \__/\ (_) | | | \__ \ (_) | |  __/
     \____/|_|  \__,_| \_/ |_|\__,_|  \____/\___/|_| |_|___/\___/|_|\___|
";

pub fn print() {
    println!("{ART}");
    println!("{:28}Bravia Console\n", "");
    println!("{:28} Version: {}", "", env!("CARGO_PKG_VERSION"));
    println!("{:23}Written by: Darko Sancanin", "");
    println!("{:25}Twitter: @darkosan", "");
    println!("{:20}https://github.com/darkosancanin\n", "");
}
