mod account;
mod match_v5;
mod static_data;
mod summoner;
