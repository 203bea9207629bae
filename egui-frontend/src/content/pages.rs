use super::{Block, Column, Page};

pub const PAGE_TITLE: &str = "📖 The Ultimate Beginner’s Guide to Financial Markets";
pub const PAGE_SUBTITLE: &str = "From Understanding to Owning: A 5-Page Action Plan";
pub const FOOTER_CAPTION: &str = "Educational Manual v1.2 | No Financial Advice Provided.";

pub static BUILDING_BLOCKS: Page = Page {
    header: "Page 1: The Definitions (Clearing the Fog)",
    intro: "To act, you must speak the language. Let's fix the basic confusion.",
    blocks: &[
        Block::Subheader("🍕 Stock vs. Shares vs. Equities"),
        Block::Bullets(&[
            "**Equities:** This is the broad category of 'ownership.'",
            "**Stock:** This is the 'stuff' you own. (e.g., 'I own stock in the tech sector.')",
            "**Shares:** These are the units.",
        ]),
        Block::Paragraph(
            "**The Pizza Metaphor:** If a company is a pizza, the **Stock** is the flavor (Pepperoni), \
             and the **Shares** are the individual slices. You buy 10 slices (shares) of the Apple pizza.",
        ),
        Block::Subheader("📜 Securities vs. Commodities"),
        Block::Bullets(&[
            "**Securities:** These are 'financial papers' that represent a claim on value. \
             This includes **Stocks** (ownership) and **Bonds** (loans).",
            "**Bonds (The I.O.U.):** When you buy a bond, you are a **Lender**. You give money to a \
             government or company, and they promise to pay you back with interest. They are safer \
             because if a company goes broke, bondholders get paid before stockholders.",
            "**Commodities:** These are 'Physical Stuff' like Gold, Oil, or Wheat. You only make money \
             here if the price of the raw material goes up.",
        ]),
        Block::Subheader("🧺 The 'Basket' (The Best Way to Buy)"),
        Block::Paragraph("You should rarely buy individual shares. Instead, you buy **Funds**."),
        Block::Bullets(&[
            "**ETF (Exchange Traded Fund):** A basket that trades like a stock on your phone.",
            "**Mutual Fund:** A basket that trades only once a day at 4:00 PM.",
            "**Index Fund:** A 'recipe' that tells a Fund to just buy the 500 biggest companies \
             (like the S&P 500) and do nothing else.",
        ]),
    ],
};

pub static WHERE_TRADING_HAPPENS: Page = Page {
    header: "Page 2: Where and How Trading Happens",
    intro: "You don't buy stocks from a person on the street; you use a Market Architecture.",
    blocks: &[
        Block::Columns(&[
            Column {
                blocks: &[
                    Block::Subheader("🏛️ 1. The Exchanges (The Marketplace)"),
                    Block::Paragraph("The Exchange is the digital platform where buyers and sellers meet."),
                    Block::Bullets(&[
                        "**NYSE (New York Stock Exchange):** The giant home of massive companies.",
                        "**NASDAQ:** Where the tech world (Apple, Google) lives.",
                        "**CBOE:** Where Options and Derivatives are traded.",
                        "**NGX (Nigerian Exchange):** Where local giants like Dangote and MTN are traded.",
                    ]),
                ],
            },
            Column {
                blocks: &[
                    Block::Subheader("🚪 2. The Broker (The Gatekeeper)"),
                    Block::Paragraph(
                        "You cannot walk onto the floor of the NYSE. You must use a **Brokerage** \
                         (e.g., Fidelity, Vanguard, Bamboo, or Zenith Assets).",
                    ),
                    Block::Bullets(&[
                        "**Their Job:** They take your order and execute it on the Exchange for you.",
                    ]),
                ],
            },
        ]),
        Block::Subheader("💰 3. How Prices are Set"),
        Block::Paragraph("Prices are determined by the **Bid-Ask Spread**:"),
        Block::Bullets(&[
            "**Bid:** The highest price a buyer is willing to pay.",
            "**Ask:** The lowest price a seller is willing to accept.",
            "The 'Price' you see on Google is just the last price where a buyer and seller actually \
             agreed to a deal.",
        ]),
    ],
};

pub static MECHANICS_OF_THE_TRADE: Page = Page {
    header: "Page 3: Mechanics of the Trade (Step-by-Step)",
    intro: "When you open your app, you have to choose *how* to buy.",
    blocks: &[
        Block::Subheader("🛒 Market Orders vs. Limit Orders"),
        Block::Bullets(&[
            "**Market Order:** 'Buy this for me right now at whatever the current price is.' \
             (Fast, but you might pay more than you expected).",
            "**Limit Order:** 'Only buy this if the price hits $150 or lower.' \
             **Always use Limit Orders** so you control your costs.",
        ]),
        Block::Subheader("🕒 Trading Hours"),
        Block::Bullets(&[
            "**Standard Hours:** 9:30 AM to 4:00 PM EST. This is when the most people are trading \
             ('Liquidity').",
            "**After-Hours:** Trading is possible but risky because fewer people are active, causing \
             prices to jump wildly.",
        ]),
        Block::Subheader("🚚 Settlement (T+1)"),
        Block::Paragraph(
            "When you sell a stock, the cash isn't 'yours' to withdraw instantly. It takes \
             **one business day** (T+1) for the electronic paperwork to clear.",
        ),
    ],
};

pub static DEEP_WATER: Page = Page {
    header: "Page 4: Advanced Trading (The Deep Water)",
    intro: "This is how professionals move money through contracts.",
    blocks: &[
        Block::Subheader("🎲 Derivatives (The Contracts)"),
        Block::Paragraph(
            "You aren't buying the company; you are buying a contract **derived** from the \
             company's price.",
        ),
        Block::Bullets(&[
            "**Options:** You pay a 'Premium' (fee) to bet on a price move. If you are wrong by a \
             certain date, your money goes to zero.",
            "**Futures:** You agree to buy a commodity (like 1,000 barrels of Oil) at a set price in \
             the future. You *must* fulfill this contract, which makes it very risky.",
        ]),
        Block::Subheader("📉 Shorting"),
        Block::Paragraph(
            "Borrowing shares to sell them high and buy them back low. You are betting that a \
             company will fail.",
        ),
    ],
};

pub static EXECUTION_PROCESS: Page = Page {
    header: "Page 5: The Execution Process",
    intro: "What does it actually look like to go from 'Information' to 'Ownership'?",
    blocks: &[
        Block::Subheader("The Sequence of a Trade"),
        Block::Numbered(&[
            "**The Portal:** You log into your **Brokerage** (The Gatekeeper).",
            "**The Selection:** You enter the **Ticker Symbol** (e.g., AAPL for Apple or MTNN for \
             MTN Nigeria).",
            "**The Instruction:** You place a **Limit Order**. You tell the broker: 'I want 5 shares \
             at no more than $190.'",
            "**The Match:** The Broker sends your request to the **Exchange** (NYSE or NGX). A seller \
             is found who agrees to your price.",
            "**The Ownership:** The Exchange confirms the trade. You now own the **Shares**.",
            "**The Clearing:** One business day later (**T+1**), the money and the shares officially \
             'settle' in the respective accounts.",
        ]),
        Block::Divider,
        Block::Subheader("🌍 Popular Assets to Watch"),
        Block::Columns(&[
            Column {
                blocks: &[
                    Block::Paragraph("**US Markets:**"),
                    Block::Bullets(&[
                        "**Stocks:** Nvidia (NVDA), Tesla (TSLA)",
                        "**ETFs:** VOO (S&P 500), QQQ (Nasdaq 100)",
                        "**Commodities:** Gold, WTI Crude Oil",
                    ]),
                ],
            },
            Column {
                blocks: &[
                    Block::Paragraph("**Nigerian Markets:**"),
                    Block::Bullets(&[
                        "**Stocks:** Dangote Cement, Zenith Bank",
                        "**Baskets:** NGX 30 Index",
                        "**Commodities:** Cocoa, Brent Crude",
                    ]),
                ],
            },
        ]),
    ],
};
