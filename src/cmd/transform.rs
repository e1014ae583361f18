use simple_social::transformed_url;

pub fn cmd_url(url: &str, transform: &str, caption: Option<&str>) {
    println!("{}", transformed_url(url, transform, caption));
}
