fn main() {
    crowdfunding_cron::app::cli::run()
}
